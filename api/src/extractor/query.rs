use axum::extract::{FromRequestParts, Query as AxumQuery};
use validator::Validate;

use crate::error::ApiError;

/// Query-string extractor whose rejection renders as an [`ApiError`].
#[derive(FromRequestParts)]
#[from_request(via(AxumQuery), rejection(ApiError))]
pub struct Query<T>(pub T);

impl<T: Validate> Validate for Query<T> {
    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        self.0.validate()
    }
}
