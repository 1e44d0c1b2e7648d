//! Schema bootstrap: create the users table if it is absent

use sqlx::PgPool;

/// Create the `users` table if it doesn't exist yet.
///
/// There is no versioned migration history; the table shape is fixed.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring users table exists...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
