use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use validator::Validate;

use crate::error::ApiError;

/// Runs `validator` rules on the inner extractor's output before the handler
/// sees it.
pub struct Valid<T>(pub T);

impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: FromRequest<S> + Validate,
    ApiError: From<T::Rejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = T::from_request(req, state).await?;
        value.validate()?;
        Ok(Valid(value))
    }
}

impl<S, T> FromRequestParts<S> for Valid<T>
where
    S: Send + Sync,
    T: FromRequestParts<S> + Validate,
    ApiError: From<T::Rejection>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let value = T::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(Valid(value))
    }
}
