//! users-server: HTTP CRUD service for user records
//!
//! Exposes create/read/update/delete over JSON and persists rows in
//! PostgreSQL through the `UserStore` trait.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use db::{DbError, MemoryUserStore, PgUserStore, UserStore};
pub use http::{build_router, run_server, ApiError, ServerError};
pub use state::AppState;
