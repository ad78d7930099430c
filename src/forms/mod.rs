//! Form definitions backing the dashboard routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod clients;
pub mod vendors;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data. Messages are shown to the
/// user as flash notifications.
pub enum FormError {
    #[error("Invalid form data: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Malformed form data")]
    Malformed,

    #[error("Name is required")]
    InvalidName,

    #[error("Event name is required")]
    InvalidEventName,

    #[error("Category is required for every priced row")]
    MissingCategory,

    #[error("Invalid price for {0}")]
    InvalidPrice(String),

    #[error("Category {0} is listed more than once")]
    DuplicateCategory(String),

    #[error("Add at least one category with a price")]
    NoCategories,

    #[error("Please enter a valid 10-digit phone number.")]
    InvalidContactNumber,

    #[error("Number of events must be between 1 and 10")]
    InvalidEventCount,

    #[error("Invalid vendor")]
    InvalidVendorId,

    #[error("Invalid client")]
    InvalidClientId,

    #[error("Event details are too long, please shorten the name or category")]
    WizardTooLarge,
}
