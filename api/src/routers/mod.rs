use axum::{Router, http::Uri};
use sea_orm::JsonValue;

use app::state::AppState;
use models::queries::ListQuery;
use models::schemas::pagination::{ListResponse, Page};

use crate::error::ApiError;

pub mod group;
pub mod location;
pub mod notification;
pub mod root;
pub mod tournament;
pub mod user;

use group::create_group_router;
use location::create_location_router;
use notification::create_notification_router;
use root::create_root_router;
use tournament::create_tournament_router;
use user::create_user_router;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(create_root_router())
        .nest("/users", create_user_router())
        .nest("/groups", create_group_router())
        .nest("/locations", create_location_router())
        .nest("/notifications", create_notification_router())
        .nest("/tournaments", create_tournament_router())
        .with_state(state)
}

/// Wraps a page in the list envelope, with links rooted at the public URL of
/// the current request.
fn list_response<F: Clone, S, R>(
    state: &AppState,
    uri: &Uri,
    page: Page<JsonValue>,
    query: &ListQuery<F, S, R>,
) -> Result<ListResponse<JsonValue, F>, ApiError> {
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    let url = state.config.request_url(path_and_query)?;
    Ok(ListResponse::new(page, query, &url))
}
