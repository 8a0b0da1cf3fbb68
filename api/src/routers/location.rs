use axum::{
    Router,
    extract::{OriginalUri, State},
    response::IntoResponse,
    routing::get,
};

use app::persistence::query::QueryEntity;
use app::persistence::locations::{
    LocationQuery, create_location, delete_location, get_location, search_locations, update_location,
};
use app::state::AppState;
use models::domains::locations;
use models::params::location::{CreateLocationParams, UpdateLocationParams};
use models::queries::{ListParams, ShapeParams, location::LocationFilters};

use super::list_response;
use crate::error::ApiError;
use crate::extractor::{Created, Json, Path, Query, Valid};

#[utoipa::path(
    get,
    path = "/locations",
    tag = "locations",
    params(ListParams, LocationFilters),
    responses(
        (status = 200, description = "One page of locations in the requested shape"),
        (status = 422, description = "Invalid pagination parameters"),
    )
)]
pub async fn locations_get(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Valid(Query(params)): Valid<Query<ListParams>>,
    Query(filters): Query<LocationFilters>,
) -> Result<impl IntoResponse, ApiError> {
    let query = LocationQuery::new(params, filters, locations::Entity::DEFAULT_PAGE_SIZE);
    let page = search_locations(&state.conn, &query).await?;
    Ok(Json(list_response(&state, &uri, page, &query)?))
}

#[utoipa::path(
    get,
    path = "/locations/{id}",
    tag = "locations",
    params(("id" = i32, Path, description = "Location id"), ShapeParams),
    responses(
        (status = 200, description = "The location in the requested shape"),
        (status = 404, description = "No such location", body = crate::models::response::ApiErrorResponse),
    )
)]
pub async fn locations_id_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(shape): Query<ShapeParams>,
) -> Result<impl IntoResponse, ApiError> {
    let location = get_location(&state.conn, id, shape.resolve()).await?;
    Ok(Json(location))
}

#[utoipa::path(
    post,
    path = "/locations",
    tag = "locations",
    request_body = CreateLocationParams,
    responses(
        (status = 201, description = "Location created", body = models::schemas::CreatedId),
    )
)]
pub async fn locations_post(
    State(state): State<AppState>,
    Valid(Json(params)): Valid<Json<CreateLocationParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let created = create_location(&state.conn, params).await?;
    Ok(Created(created))
}

#[utoipa::path(
    patch,
    path = "/locations/{id}",
    tag = "locations",
    params(("id" = i32, Path, description = "Location id")),
    request_body = UpdateLocationParams,
    responses(
        (status = 200, description = "The updated location"),
        (status = 404, description = "No such location"),
    )
)]
pub async fn locations_id_patch(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Valid(Json(params)): Valid<Json<UpdateLocationParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let location = update_location(&state.conn, id, params).await?;
    Ok(Json(location))
}

#[utoipa::path(
    delete,
    path = "/locations/{id}",
    tag = "locations",
    params(("id" = i32, Path, description = "Location id")),
    responses(
        (status = 200, description = "The deleted location"),
        (status = 404, description = "No such location"),
    )
)]
pub async fn locations_id_delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let location = delete_location(&state.conn, id).await?;
    Ok(Json(location))
}

pub fn create_location_router() -> Router<AppState> {
    Router::new()
        .route("/", get(locations_get).post(locations_post))
        .route(
            "/{id}",
            get(locations_id_get).patch(locations_id_patch).delete(locations_id_delete),
        )
}
