//! Domain aggregates and the pure computations over them.

pub mod client;
pub mod cost;
pub mod event;
pub mod graph;
pub mod summary;
pub mod types;
pub mod vendor;
pub mod wizard;
