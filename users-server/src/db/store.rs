//! Store abstraction handlers talk to
//!
//! Handlers hold an `Arc<dyn UserStore>` so the PostgreSQL store can be
//! swapped for the in-memory one in tests.

use async_trait::async_trait;

use crate::models::{NewUser, User};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("store is closed")]
    Closed,
}

impl DbError {
    pub(crate) fn user_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "user",
            id: id.to_string(),
        }
    }
}

/// Persistence operations for user records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, ordered by id.
    async fn list_all(&self) -> Result<Vec<User>, DbError>;

    /// Look up one user; unknown id is `DbError::NotFound`.
    async fn get_by_id(&self, id: i64) -> Result<User, DbError>;

    /// Insert and return the row with its assigned id.
    async fn insert(&self, user: NewUser) -> Result<User, DbError>;

    /// Save every column of an existing row.
    async fn update(&self, user: &User) -> Result<User, DbError>;

    /// Remove a row; unknown id is `DbError::NotFound`.
    async fn delete_by_id(&self, id: i64) -> Result<(), DbError>;

    /// Release underlying connections. Safe to call more than once.
    async fn close(&self);
}
