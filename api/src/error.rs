use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use app::error::AppError;
use app::persistence::query::QueryError;

use crate::extractor::Json;
use crate::models::response::{ApiErrorResponse, ValidationErrorResponse};

/// Error returned by every handler. Wraps whatever went wrong and picks the
/// status code from the concrete error type at render time.
#[derive(Debug)]
pub struct ApiError(pub anyhow::Error);

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

fn message(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ApiErrorResponse {
            message: message.into(),
        }),
    )
        .into_response()
}

fn internal(err: &anyhow::Error) -> Response {
    tracing::error!("internal error: {err:#}");
    message(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Some(errors) = self.0.downcast_ref::<ValidationErrors>() {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorResponse::from(errors.clone())),
            )
                .into_response();
        }
        if let Some(rejection) = self.0.downcast_ref::<QueryRejection>() {
            return message(rejection.status(), rejection.body_text());
        }
        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            return message(rejection.status(), rejection.body_text());
        }
        if let Some(rejection) = self.0.downcast_ref::<PathRejection>() {
            return message(rejection.status(), rejection.body_text());
        }

        match self.0.downcast_ref::<AppError>() {
            Some(err @ AppError::NotFound(_)) => message(StatusCode::NOT_FOUND, err.to_string()),
            Some(err @ AppError::Conflict(_)) => message(StatusCode::CONFLICT, err.to_string()),
            Some(err @ AppError::InvalidReference(_)) => {
                message(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            Some(AppError::Query(err @ QueryError::InvalidFilterCombination { .. })) => {
                message(StatusCode::BAD_REQUEST, err.to_string())
            }
            _ => internal(&self.0),
        }
    }
}
