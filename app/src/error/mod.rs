use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::persistence::query::QueryError;

/// Domain-level failures surfaced by the persistence services.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    InvalidReference(String),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl AppError {
    /// Maps storage constraint violations to domain errors. Anything else is
    /// passed through untouched.
    pub fn from_write(entity: &'static str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::debug!(entity, %detail, "unique constraint violated");
                AppError::Conflict(format!("{entity} already exists"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                tracing::debug!(entity, %detail, "foreign key constraint violated");
                AppError::InvalidReference(format!("{entity} references a missing record"))
            }
            _ => AppError::Db(err),
        }
    }
}
