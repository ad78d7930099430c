//! Errors raised by the persistence layer.
//!
//! Diesel errors are folded into the few cases the vendor and client tables
//! can actually produce.

use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    /// A vendor already prices this category (`vendor_categories` key).
    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    /// An event row pointed at a client that does not exist.
    #[error("Unknown client: {0}")]
    UnknownClient(String),

    /// `NOT NULL` or `CHECK` (negative price) rejected a row.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A stored row does not satisfy the domain value rules.
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,

            DieselError::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                match kind {
                    DatabaseErrorKind::UniqueViolation if message.contains("vendor_categories") => {
                        RepositoryError::DuplicateCategory(message)
                    }
                    DatabaseErrorKind::ForeignKeyViolation => {
                        RepositoryError::UnknownClient(message)
                    }
                    DatabaseErrorKind::NotNullViolation | DatabaseErrorKind::CheckViolation => {
                        RepositoryError::ConstraintViolation(message)
                    }
                    _ => RepositoryError::DatabaseError(message),
                }
            }

            DieselError::DeserializationError(e) => {
                RepositoryError::ValidationError(format!("Unreadable row: {e}"))
            }

            other => RepositoryError::DatabaseError(other.to_string()),
        }
    }
}

impl From<R2D2Error> for RepositoryError {
    fn from(err: R2D2Error) -> Self {
        RepositoryError::ConnectionError(err.to_string())
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::ConnectionError(err.to_string())
    }
}
