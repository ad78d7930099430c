//! Errors returned by the service layer.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    /// User input rejected by a form; the message is shown as is.
    #[error("{0}")]
    Form(String),

    #[error("invalid value: {0}")]
    TypeConstraint(String),

    #[error("repository error: {0}")]
    Repository(RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::DuplicateCategory(_) => {
                ServiceError::Form("Each category can be listed only once per vendor.".to_string())
            }
            other => ServiceError::Repository(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_not_found_becomes_not_found() {
        assert!(matches!(
            ServiceError::from(RepositoryError::NotFound),
            ServiceError::NotFound
        ));
    }

    #[test]
    fn other_repository_errors_are_wrapped() {
        let err = ServiceError::from(RepositoryError::ConnectionError("pool closed".into()));
        assert!(matches!(
            err,
            ServiceError::Repository(RepositoryError::ConnectionError(_))
        ));
        assert_eq!(
            err.to_string(),
            "repository error: Connection error: pool closed"
        );
    }

    #[test]
    fn duplicate_category_is_reported_as_form_error() {
        let err = ServiceError::from(RepositoryError::DuplicateCategory(
            "UNIQUE constraint failed: vendor_categories.vendor_id, vendor_categories.category"
                .into(),
        ));
        assert!(matches!(err, ServiceError::Form(_)));
    }

    #[test]
    fn form_message_is_shown_verbatim() {
        let err = ServiceError::Form("Please enter a valid 10-digit phone number.".into());
        assert_eq!(err.to_string(), "Please enter a valid 10-digit phone number.");
    }
}
