use axum::{
    extract::{FromRequest, Json as AxumJson},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::error::ApiError;

/// JSON body extractor whose rejection renders as an [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(AxumJson), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T> IntoResponse for Json<T>
where
    AxumJson<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

impl<T: Validate> Validate for Json<T> {
    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        self.0.validate()
    }
}

/// A JSON body sent with `201 Created`.
pub struct Created<T>(pub T);

impl<T> IntoResponse for Created<T>
where
    AxumJson<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        (StatusCode::CREATED, AxumJson(self.0)).into_response()
    }
}
