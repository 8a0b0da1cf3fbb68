use axum::{
    Router,
    extract::{OriginalUri, State},
    response::IntoResponse,
    routing::get,
};

use app::persistence::query::QueryEntity;
use app::persistence::tournaments::{
    TournamentQuery, create_tournament, delete_tournament, get_tournament, search_tournaments, update_tournament,
};
use app::state::AppState;
use models::domains::tournaments;
use models::params::tournament::{CreateTournamentParams, UpdateTournamentParams};
use models::queries::{ListParams, ShapeParams, tournament::TournamentFilters};

use super::list_response;
use crate::error::ApiError;
use crate::extractor::{Created, Json, Path, Query, Valid};

#[utoipa::path(
    get,
    path = "/tournaments",
    tag = "tournaments",
    params(ListParams, TournamentFilters),
    responses(
        (status = 200, description = "One page of tournaments in the requested shape"),
        (status = 422, description = "Invalid pagination parameters"),
    )
)]
pub async fn tournaments_get(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Valid(Query(params)): Valid<Query<ListParams>>,
    Query(filters): Query<TournamentFilters>,
) -> Result<impl IntoResponse, ApiError> {
    let query = TournamentQuery::new(params, filters, tournaments::Entity::DEFAULT_PAGE_SIZE);
    let page = search_tournaments(&state.conn, &query).await?;
    Ok(Json(list_response(&state, &uri, page, &query)?))
}

#[utoipa::path(
    get,
    path = "/tournaments/{id}",
    tag = "tournaments",
    params(("id" = i32, Path, description = "Tournament id"), ShapeParams),
    responses(
        (status = 200, description = "The tournament in the requested shape"),
        (status = 404, description = "No such tournament", body = crate::models::response::ApiErrorResponse),
    )
)]
pub async fn tournaments_id_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(shape): Query<ShapeParams>,
) -> Result<impl IntoResponse, ApiError> {
    let tournament = get_tournament(&state.conn, id, shape.resolve()).await?;
    Ok(Json(tournament))
}

#[utoipa::path(
    post,
    path = "/tournaments",
    tag = "tournaments",
    request_body = CreateTournamentParams,
    responses(
        (status = 201, description = "Tournament created", body = models::schemas::CreatedId),
        (status = 404, description = "A referenced record does not exist"),
    )
)]
pub async fn tournaments_post(
    State(state): State<AppState>,
    Valid(Json(params)): Valid<Json<CreateTournamentParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let created = create_tournament(&state.conn, params).await?;
    Ok(Created(created))
}

#[utoipa::path(
    patch,
    path = "/tournaments/{id}",
    tag = "tournaments",
    params(("id" = i32, Path, description = "Tournament id")),
    request_body = UpdateTournamentParams,
    responses(
        (status = 200, description = "The updated tournament"),
        (status = 404, description = "No such tournament"),
    )
)]
pub async fn tournaments_id_patch(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Valid(Json(params)): Valid<Json<UpdateTournamentParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let tournament = update_tournament(&state.conn, id, params).await?;
    Ok(Json(tournament))
}

#[utoipa::path(
    delete,
    path = "/tournaments/{id}",
    tag = "tournaments",
    params(("id" = i32, Path, description = "Tournament id")),
    responses(
        (status = 200, description = "The deleted tournament"),
        (status = 404, description = "No such tournament"),
    )
)]
pub async fn tournaments_id_delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let tournament = delete_tournament(&state.conn, id).await?;
    Ok(Json(tournament))
}

pub fn create_tournament_router() -> Router<AppState> {
    Router::new()
        .route("/", get(tournaments_get).post(tournaments_post))
        .route(
            "/{id}",
            get(tournaments_id_get).patch(tournaments_id_patch).delete(tournaments_id_delete),
        )
}
