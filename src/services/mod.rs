//! Business workflows invoked by the HTTP handlers.
//!
//! Services are generic over the repository traits so they can run against
//! [`crate::repository::DieselRepository`] in production and against mocks or
//! in-memory stores in tests.

pub mod api;
pub mod clients;
pub mod errors;
pub mod graph;
pub mod main;
#[cfg(test)]
pub(crate) mod memory;
pub mod vendors;

pub use errors::{ServiceError, ServiceResult};
