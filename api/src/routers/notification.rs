use axum::{
    Router,
    extract::{OriginalUri, State},
    response::IntoResponse,
    routing::get,
};

use app::persistence::query::QueryEntity;
use app::persistence::notifications::{
    NotificationQuery, create_notification, delete_notification, get_notification, search_notifications, update_notification,
};
use app::state::AppState;
use models::domains::notifications;
use models::params::notification::{CreateNotificationParams, UpdateNotificationParams};
use models::queries::{ListParams, ShapeParams, notification::NotificationFilters};

use super::list_response;
use crate::error::ApiError;
use crate::extractor::{Created, Json, Path, Query, Valid};

#[utoipa::path(
    get,
    path = "/notifications",
    tag = "notifications",
    params(ListParams, NotificationFilters),
    responses(
        (status = 200, description = "One page of notifications in the requested shape"),
        (status = 422, description = "Invalid pagination parameters"),
    )
)]
pub async fn notifications_get(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Valid(Query(params)): Valid<Query<ListParams>>,
    Query(filters): Query<NotificationFilters>,
) -> Result<impl IntoResponse, ApiError> {
    let query = NotificationQuery::new(params, filters, notifications::Entity::DEFAULT_PAGE_SIZE);
    let page = search_notifications(&state.conn, &query).await?;
    Ok(Json(list_response(&state, &uri, page, &query)?))
}

#[utoipa::path(
    get,
    path = "/notifications/{id}",
    tag = "notifications",
    params(("id" = i32, Path, description = "Notification id"), ShapeParams),
    responses(
        (status = 200, description = "The notification in the requested shape"),
        (status = 404, description = "No such notification", body = crate::models::response::ApiErrorResponse),
    )
)]
pub async fn notifications_id_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(shape): Query<ShapeParams>,
) -> Result<impl IntoResponse, ApiError> {
    let notification = get_notification(&state.conn, id, shape.resolve()).await?;
    Ok(Json(notification))
}

#[utoipa::path(
    post,
    path = "/notifications",
    tag = "notifications",
    request_body = CreateNotificationParams,
    responses(
        (status = 201, description = "Notification created", body = models::schemas::CreatedId),
        (status = 404, description = "A referenced record does not exist"),
    )
)]
pub async fn notifications_post(
    State(state): State<AppState>,
    Valid(Json(params)): Valid<Json<CreateNotificationParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let created = create_notification(&state.conn, params).await?;
    Ok(Created(created))
}

#[utoipa::path(
    patch,
    path = "/notifications/{id}",
    tag = "notifications",
    params(("id" = i32, Path, description = "Notification id")),
    request_body = UpdateNotificationParams,
    responses(
        (status = 200, description = "The updated notification"),
        (status = 404, description = "No such notification"),
    )
)]
pub async fn notifications_id_patch(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Valid(Json(params)): Valid<Json<UpdateNotificationParams>>,
) -> Result<impl IntoResponse, ApiError> {
    let notification = update_notification(&state.conn, id, params).await?;
    Ok(Json(notification))
}

#[utoipa::path(
    delete,
    path = "/notifications/{id}",
    tag = "notifications",
    params(("id" = i32, Path, description = "Notification id")),
    responses(
        (status = 200, description = "The deleted notification"),
        (status = 404, description = "No such notification"),
    )
)]
pub async fn notifications_id_delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let notification = delete_notification(&state.conn, id).await?;
    Ok(Json(notification))
}

pub fn create_notification_router() -> Router<AppState> {
    Router::new()
        .route("/", get(notifications_get).post(notifications_post))
        .route(
            "/{id}",
            get(notifications_id_get).patch(notifications_id_patch).delete(notifications_id_delete),
        )
}
