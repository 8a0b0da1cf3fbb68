pub mod pagination;

use serde::Serialize;
use utoipa::ToSchema;

/// Identifier of a freshly inserted row.
#[derive(Serialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreatedId {
    pub id: i32,
}
