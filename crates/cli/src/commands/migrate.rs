//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! pv-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL_MIGRATION` - connection string with DDL rights, preferred when set
//! - `DATABASE_URL` - fallback connection string shared with the site
//!
//! Migration files live in `crates/site/migrations/` and are embedded
//! into the binary at compile time.

use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use thiserror::Error;

/// Errors that can occur while migrating.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Apply pending migrations to the site database.
///
/// Prefers `DATABASE_URL_MIGRATION` so schema changes can run under a
/// role with DDL rights while the site itself connects with a narrower
/// one.
///
/// # Errors
///
/// Returns an error if no connection string is configured, the database
/// is unreachable, or a migration fails to apply.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL_MIGRATION")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| MigrationError::MissingEnvVar("DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url.expose_secret()).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../site/migrations").run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
