//! Rental data JSON API.
//!
//! Thin read-only wrappers over [`PropertyRepository`]. Without a
//! configured database these answer 503; the rest of the site keeps
//! working.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use prime_villa_core::PropertyId;

use crate::db::PropertyRepository;
use crate::error::{AppError, Result};
use crate::models::{Property, PropertyWithOwner};
use crate::state::AppState;

/// List all properties with owner summaries.
#[instrument(skip(state))]
pub async fn list_properties(
    State(state): State<AppState>,
) -> Result<Json<Vec<PropertyWithOwner>>> {
    let pool = state.pool().ok_or_else(no_database)?;
    let properties = PropertyRepository::new(pool).list_with_owners().await?;
    Ok(Json(properties))
}

/// Fetch a single property by ID.
#[instrument(skip(state))]
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<PropertyId>,
) -> Result<Json<Property>> {
    let pool = state.pool().ok_or_else(no_database)?;
    let property = PropertyRepository::new(pool)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("property {id}")))?;
    Ok(Json(property))
}

fn no_database() -> AppError {
    AppError::Unavailable("rental data requires a configured database".to_string())
}
