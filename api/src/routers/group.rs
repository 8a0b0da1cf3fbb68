use axum::{
    Router,
    extract::{OriginalUri, State},
    response::IntoResponse,
    routing::{get, post},
};

use app::persistence::query::QueryEntity;
use app::persistence::groups::{
    GroupQuery, create_group, delete_group, get_group, join_group, search_groups, update_group,
};
use app::state::AppState;
use models::domains::groups;
use models::params::group::{CreateGroupParams, JoinGroupParams, UpdateGroupParams};
use models::queries::{ListParams, ShapeParams, group::GroupFilters};

use super::list_response;
use crate::error::ApiError;
use crate::extractor::{Created, Json, Path, Query, Valid};

#[utoipa::path(
    get,
    path = "/groups",
    tag = "groups",
    params(ListParams, GroupFilters),
    responses(
        (status = 200, description = "One page of groups in the requested shape"),
        (status = 422, description = "Invalid pagination parameters"),
    )
)]
pub async fn groups_get(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Valid(Query(params)): Valid<Query<ListParams>>,
    Query(filters): Query<GroupFilters>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GroupQuery::new(params, filters, groups::Entity::DEFAULT_PAGE_SIZE);
    let page = search_groups(&state.conn, &query).await?;
    Ok(Json(list_response(&state, &uri, page, &query)?))
}

#[utoipa::path(
    get,
    path = "/groups/{id}",
    tag = "groups",
    params(("id" = i32, Path, description = "Group id"), ShapeParams),
    responses(
        (status = 200, description = "The group in the requested shape"),
        (status = 404, description = "No such group", body = crate::models::response::ApiErrorResponse),
    )
)]
pub async fn groups_id_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(shape): Query<ShapeParams>,
) -> Result<impl IntoResponse, ApiError> {
    let group = get_group(&state.conn, id, shape.resolve()).await?;
    Ok(Json(group))
}

#[utoipa::path(
    post,
    path = "/groups",
    tag = "groups",
    request_body = CreateGroupParams,
    responses(
        (status = 201, description = "Group created", body = models::schemas::CreatedId),
        (status = 409, description = "Group name already taken"),
    )
)]
pub async fn groups_post(
    State(state): State<AppState>,
    Valid(Json(params)): Valid<Json<CreateGroupParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let created = create_group(&state.conn, params).await?;
    Ok(Created(created))
}

#[utoipa::path(
    patch,
    path = "/groups/{id}",
    tag = "groups",
    params(("id" = i32, Path, description = "Group id")),
    request_body = UpdateGroupParams,
    responses(
        (status = 200, description = "The updated group"),
        (status = 404, description = "No such group"),
    )
)]
pub async fn groups_id_patch(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Valid(Json(params)): Valid<Json<UpdateGroupParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let group = update_group(&state.conn, id, params).await?;
    Ok(Json(group))
}

#[utoipa::path(
    delete,
    path = "/groups/{id}",
    tag = "groups",
    params(("id" = i32, Path, description = "Group id")),
    responses(
        (status = 200, description = "The deleted group"),
        (status = 404, description = "No such group"),
    )
)]
pub async fn groups_id_delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let group = delete_group(&state.conn, id).await?;
    Ok(Json(group))
}

#[utoipa::path(
    post,
    path = "/groups/{id}/members",
    tag = "groups",
    params(("id" = i32, Path, description = "Group id")),
    request_body = JoinGroupParams,
    responses(
        (status = 201, description = "Membership created"),
        (status = 404, description = "No such group or user"),
        (status = 409, description = "The user is already a member"),
    )
)]
pub async fn groups_id_members_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Valid(Json(params)): Valid<Json<JoinGroupParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let member = join_group(&state.conn, id, params).await?;
    Ok(Created(member))
}

pub fn create_group_router() -> Router<AppState> {
    Router::new()
        .route("/", get(groups_get).post(groups_post))
        .route(
            "/{id}",
            get(groups_id_get).patch(groups_id_patch).delete(groups_id_delete),
        )
        .route("/{id}/members", post(groups_id_members_post))
}
