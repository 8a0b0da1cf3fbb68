use axum::{
    Router,
    extract::{OriginalUri, State},
    response::IntoResponse,
    routing::get,
};

use app::persistence::query::QueryEntity;
use app::persistence::users::{
    UserQuery, create_user, delete_user, get_user, search_users, update_user,
};
use app::state::AppState;
use models::domains::users;
use models::params::user::{CreateUserParams, UpdateUserParams};
use models::queries::{ListParams, ShapeParams, user::UserFilters};

use super::list_response;
use crate::error::ApiError;
use crate::extractor::{Created, Json, Path, Query, Valid};

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(ListParams, UserFilters),
    responses(
        (status = 200, description = "One page of users in the requested shape"),
        (status = 422, description = "Invalid pagination parameters"),
    )
)]
pub async fn users_get(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Valid(Query(params)): Valid<Query<ListParams>>,
    Query(filters): Query<UserFilters>,
) -> Result<impl IntoResponse, ApiError> {
    let query = UserQuery::new(params, filters, users::Entity::DEFAULT_PAGE_SIZE);
    let page = search_users(&state.conn, &query).await?;
    Ok(Json(list_response(&state, &uri, page, &query)?))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id"), ShapeParams),
    responses(
        (status = 200, description = "The user in the requested shape"),
        (status = 404, description = "No such user", body = crate::models::response::ApiErrorResponse),
    )
)]
pub async fn users_id_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(shape): Query<ShapeParams>,
) -> Result<impl IntoResponse, ApiError> {
    let user = get_user(&state.conn, id, shape.resolve()).await?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserParams,
    responses(
        (status = 201, description = "User created", body = models::schemas::CreatedId),
        (status = 409, description = "Username or email already taken"),
    )
)]
pub async fn users_post(
    State(state): State<AppState>,
    Valid(Json(params)): Valid<Json<CreateUserParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let created = create_user(&state.conn, params).await?;
    Ok(Created(created))
}

#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserParams,
    responses(
        (status = 200, description = "The updated user"),
        (status = 404, description = "No such user"),
    )
)]
pub async fn users_id_patch(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Valid(Json(params)): Valid<Json<UpdateUserParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let user = update_user(&state.conn, id, params).await?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The deleted user"),
        (status = 404, description = "No such user"),
    )
)]
pub async fn users_id_delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let user = delete_user(&state.conn, id).await?;
    Ok(Json(user))
}

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", get(users_get).post(users_post))
        .route(
            "/{id}",
            get(users_id_get).patch(users_id_patch).delete(users_id_delete),
        )
}
