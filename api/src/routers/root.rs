use axum::{Json, Router, extract::State, routing::get};
use sea_orm::{ConnectionTrait, Statement};
use serde_json::{Value, json};
use utoipa::OpenApi;

use app::state::AppState;

use crate::error::ApiError;
use crate::openapi::ApiDoc;

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Service and database are reachable"))
)]
pub async fn root_get(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let backend = state.conn.get_database_backend();
    let database: i32 = state
        .conn
        .query_one(Statement::from_string(backend, "SELECT 1"))
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Query result not found".to_string()))?
        .try_get_by(0)?;

    Ok(Json(json!({ "status": "ok", "database": database == 1 })))
}

async fn openapi_get() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn create_root_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root_get))
        .route("/api-docs/openapi.json", get(openapi_get))
}
