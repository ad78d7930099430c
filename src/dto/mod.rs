//! DTO modules that bridge services with templates and APIs.

pub mod api;
pub mod clients;
pub mod graph;
pub mod main;
pub mod vendors;
