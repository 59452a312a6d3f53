//! Observability concerns (logging/tracing).

pub mod tracing;

pub use tracing::init;
