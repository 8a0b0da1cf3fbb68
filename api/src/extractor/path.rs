use axum::extract::{FromRequestParts, Path as AxumPath};

use crate::error::ApiError;

#[derive(FromRequestParts)]
#[from_request(via(AxumPath), rejection(ApiError))]
pub struct Path<T>(pub T);
