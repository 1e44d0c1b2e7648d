//! Database layer - connection pool, schema bootstrap and user stores
//!
//! # Design Principles
//!
//! - Handlers see only the `UserStore` trait, never a pool
//! - One statement per store operation, `RETURNING` instead of re-reads
//! - Missing rows surface as `DbError::NotFound`, not as empty results

pub mod memory;
pub mod migrations;
pub mod repos;
pub mod store;

pub use memory::MemoryUserStore;
pub use repos::PgUserStore;
pub use store::{DbError, UserStore};
