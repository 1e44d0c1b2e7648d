//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Graceful shutdown followed by store close
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, serve_until, ServerError};
