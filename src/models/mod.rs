//! Database models mirroring the SQLite schema.

pub mod client;
#[cfg(feature = "server")]
pub mod config;
pub mod event;
pub mod vendor;
