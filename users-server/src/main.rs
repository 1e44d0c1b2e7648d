//! users-server binary
//!
//! Reads DATABASE_URL, connects to PostgreSQL, ensures the users table
//! exists and serves the API on port 8080 until interrupted.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use users_server::{run_server, PgUserStore, ServerConfig};

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

async fn run() -> Result<()> {
    let config = ServerConfig::from_env()?;

    info!("Connecting to database...");
    let store = PgUserStore::connect(&config)
        .await
        .context("Database connection failed")?;
    info!("Connected to PostgreSQL");

    // Blocks until shutdown; the store is closed before this returns
    run_server(Arc::new(store), &config)
        .await
        .context("Server failed")?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    dotenvy::dotenv().ok();
    init_tracing().ok();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
