//! Startup configuration read from the environment

use std::net::SocketAddr;

/// Port the API listens on
pub const DEFAULT_PORT: u16 = 8080;

/// Default maximum connections for the pool.
/// Kept low; the service does at most one write per request.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// PostgreSQL connection string
    pub database_url: String,

    /// Maximum connections held by the pool
    pub max_connections: u32,
}

/// Configuration error, reported before anything is started
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URL environment variable is not set")]
    MissingDatabaseUrl,
}

impl ServerConfig {
    /// Build a config for the given connection string with default bind address.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Load from process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup, so tests don't touch the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        Ok(Self::new(database_url))
    }
}
