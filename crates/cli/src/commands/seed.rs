//! Seed the database with demo rental data.
//!
//! # Usage
//!
//! ```bash
//! pv-cli seed
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string for the site database
//!
//! Inserts the owner and property that the property API is demoed
//! against. Running it a second time fails on the owner's unique email.

use prime_villa_core::{Email, EmailError, UserId};
use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;
use thiserror::Error;

const OWNER_EMAIL: &str = "owner@example.com";
const OWNER_NAME: &str = "John Doe";

const PROPERTY_NAME: &str = "Sunset Villa";
const PROPERTY_ADDRESS: &str = "123 Beach Road, Miami, FL 33139";
const PROPERTY_BEDROOMS: i32 = 3;
const PROPERTY_BATHROOMS: i32 = 2;
const PROPERTY_MONTHLY_RENT: i32 = 3500;

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// The built-in owner email failed validation.
    #[error("Invalid seed email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Insert the demo owner and their property.
///
/// Both rows are written in one transaction, so a failure leaves the
/// database untouched.
///
/// # Errors
///
/// Returns an error if `DATABASE_URL` is not set, the database is
/// unreachable, or an insert fails (including a rerun hitting the
/// owner's unique email).
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let email = Email::parse(OWNER_EMAIL)?;

    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| SeedError::MissingEnvVar("DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url.expose_secret()).await?;

    let mut tx = pool.begin().await?;

    tracing::info!("Creating owner: {} ({})", OWNER_NAME, email.as_str());
    let owner_id = sqlx::query_scalar::<_, UserId>(
        r"
        INSERT INTO users (email, name)
        VALUES ($1, $2)
        RETURNING id
        ",
    )
    .bind(email.as_str())
    .bind(OWNER_NAME)
    .fetch_one(&mut *tx)
    .await?;

    tracing::info!("Creating property: {PROPERTY_NAME}");
    sqlx::query(
        r"
        INSERT INTO properties (owner_id, name, address, bedrooms, bathrooms, monthly_rent)
        VALUES ($1, $2, $3, $4, $5, $6)
        ",
    )
    .bind(owner_id)
    .bind(PROPERTY_NAME)
    .bind(PROPERTY_ADDRESS)
    .bind(PROPERTY_BEDROOMS)
    .bind(PROPERTY_BATHROOMS)
    .bind(PROPERTY_MONTHLY_RENT)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!("Seeding complete!");
    tracing::info!("  Owner: {} <{}>", OWNER_NAME, email.as_str());
    tracing::info!(
        "  Property: {PROPERTY_NAME}, {PROPERTY_BEDROOMS} bd / {PROPERTY_BATHROOMS} ba, {PROPERTY_MONTHLY_RENT} EUR"
    );

    Ok(())
}
