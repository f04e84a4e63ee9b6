//! Shared building blocks for Pulse HTTP services: error bodies, request
//! middleware, tracing setup, shutdown signals and serde helpers.

pub mod error;
pub mod middleware;
pub mod serde;
pub mod shutdown;
pub mod tracing;
