//! Property repository for database operations.
//!
//! The listing query left-joins owners so a property with a missing user
//! row still appears, just without owner details.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use prime_villa_core::{Email, PropertyId, Rent, UserId};

use super::RepositoryError;
use crate::models::{OwnerSummary, Property, PropertyWithOwner};

/// Row shape for the listing query.
#[derive(Debug, sqlx::FromRow)]
struct ListingRow {
    id: Uuid,
    name: String,
    address: String,
    bedrooms: i32,
    bathrooms: i32,
    monthly_rent: i32,
    owner_id: Option<Uuid>,
    owner_name: Option<String>,
    owner_email: Option<String>,
}

/// Row shape for the by-id query.
#[derive(Debug, sqlx::FromRow)]
struct PropertyRow {
    id: Uuid,
    owner_id: Uuid,
    name: String,
    address: String,
    bedrooms: i32,
    bathrooms: i32,
    monthly_rent: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Repository for property database operations.
pub struct PropertyRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepository<'a> {
    /// Create a new property repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all properties together with their owner summaries.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a joined owner row is
    /// incomplete or carries an invalid email.
    #[instrument(skip(self))]
    pub async fn list_with_owners(&self) -> Result<Vec<PropertyWithOwner>, RepositoryError> {
        let rows = sqlx::query_as::<_, ListingRow>(
            r"
            SELECT p.id, p.name, p.address, p.bedrooms, p.bathrooms, p.monthly_rent,
                   u.id AS owner_id, u.name AS owner_name, u.email AS owner_email
            FROM properties p
            LEFT JOIN users u ON u.id = p.owner_id
            ORDER BY p.created_at
            ",
        )
        .fetch_all(self.pool)
        .await?;

        debug!(count = rows.len(), "Listed properties");

        rows.into_iter().map(map_listing_row).collect()
    }

    /// Get a single property by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self), fields(property_id = %id))]
    pub async fn get_by_id(&self, id: PropertyId) -> Result<Option<Property>, RepositoryError> {
        let row = sqlx::query_as::<_, PropertyRow>(
            r"
            SELECT id, owner_id, name, address, bedrooms, bathrooms, monthly_rent,
                   created_at, updated_at
            FROM properties
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(map_property_row))
    }
}

fn map_listing_row(row: ListingRow) -> Result<PropertyWithOwner, RepositoryError> {
    let owner = match (row.owner_id, row.owner_name, row.owner_email) {
        (Some(id), Some(name), Some(email)) => {
            let email = Email::parse(&email).map_err(|e| {
                RepositoryError::DataCorruption(format!("invalid owner email in database: {e}"))
            })?;
            Some(OwnerSummary {
                id: UserId::new(id),
                name,
                email,
            })
        }
        (None, None, None) => None,
        _ => {
            return Err(RepositoryError::DataCorruption(format!(
                "partial owner row joined to property {}",
                row.id
            )));
        }
    };

    Ok(PropertyWithOwner {
        id: PropertyId::new(row.id),
        name: row.name,
        address: row.address,
        bedrooms: row.bedrooms,
        bathrooms: row.bathrooms,
        monthly_rent: Rent::new(row.monthly_rent),
        owner,
    })
}

fn map_property_row(row: PropertyRow) -> Property {
    Property {
        id: PropertyId::new(row.id),
        owner_id: UserId::new(row.owner_id),
        name: row.name,
        address: row.address,
        bedrooms: row.bedrooms,
        bathrooms: row.bathrooms,
        monthly_rent: Rent::new(row.monthly_rent),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn listing_row(owner: Option<(&str, &str)>) -> ListingRow {
        let owner_id = owner.map(|_| Uuid::new_v4());
        ListingRow {
            id: Uuid::new_v4(),
            name: "Sunset Villa".to_string(),
            address: "123 Beach Road, Miami, FL 33139".to_string(),
            bedrooms: 3,
            bathrooms: 2,
            monthly_rent: 3500,
            owner_id,
            owner_name: owner.map(|(name, _)| name.to_string()),
            owner_email: owner.map(|(_, email)| email.to_string()),
        }
    }

    #[test]
    fn test_maps_joined_owner() {
        let row = listing_row(Some(("John Doe", "owner@example.com")));
        let property = map_listing_row(row).unwrap();

        let owner = property.owner.unwrap();
        assert_eq!(owner.name, "John Doe");
        assert_eq!(owner.email.as_str(), "owner@example.com");
        assert_eq!(property.monthly_rent, Rent::new(3500));
    }

    #[test]
    fn test_keeps_property_without_owner_row() {
        let row = listing_row(None);
        let property = map_listing_row(row).unwrap();
        assert!(property.owner.is_none());
    }

    #[test]
    fn test_partial_owner_row_is_corruption() {
        let mut row = listing_row(Some(("John Doe", "owner@example.com")));
        row.owner_email = None;

        let result = map_listing_row(row);
        assert!(matches!(result, Err(RepositoryError::DataCorruption(_))));
    }

    #[test]
    fn test_invalid_owner_email_is_corruption() {
        let row = listing_row(Some(("John Doe", "not-an-email")));
        let result = map_listing_row(row);
        assert!(matches!(result, Err(RepositoryError::DataCorruption(_))));
    }

    #[test]
    fn test_maps_full_property_row() {
        let now = Utc::now();
        let row = PropertyRow {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: "Sunset Villa".to_string(),
            address: "123 Beach Road, Miami, FL 33139".to_string(),
            bedrooms: 3,
            bathrooms: 2,
            monthly_rent: 3500,
            created_at: now,
            updated_at: now,
        };

        let property = map_property_row(row);
        assert_eq!(property.bedrooms, 3);
        assert_eq!(property.created_at, now);
    }
}
