//! Rental property models.
//!
//! Two shapes cover the two read paths: the listing joins each property
//! with a summary of its owner, while the by-id fetch returns the full
//! row including timestamps.

use chrono::{DateTime, Utc};
use prime_villa_core::{Email, PropertyId, Rent, UserId};
use serde::Serialize;

/// Owner fields exposed alongside a listed property.
#[derive(Debug, Clone, Serialize)]
pub struct OwnerSummary {
    pub id: UserId,
    pub name: String,
    pub email: Email,
}

/// A property as returned by the listing query.
///
/// `owner` is `None` when the owning user row is missing; the listing
/// keeps such properties rather than dropping them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyWithOwner {
    pub id: PropertyId,
    pub name: String,
    pub address: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub monthly_rent: Rent,
    pub owner: Option<OwnerSummary>,
}

/// A full property row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub owner_id: UserId,
    pub name: String,
    pub address: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub monthly_rent: Rent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_owner() -> OwnerSummary {
        OwnerSummary {
            id: UserId::generate(),
            name: "John Doe".to_string(),
            email: Email::parse("owner@example.com").unwrap(),
        }
    }

    #[test]
    fn test_listing_serializes_camel_case() {
        let property = PropertyWithOwner {
            id: PropertyId::generate(),
            name: "Sunset Villa".to_string(),
            address: "123 Beach Road, Miami, FL 33139".to_string(),
            bedrooms: 3,
            bathrooms: 2,
            monthly_rent: Rent::new(3500),
            owner: Some(sample_owner()),
        };

        let json = serde_json::to_value(&property).unwrap();
        assert_eq!(json["monthlyRent"], 3500);
        assert_eq!(json["owner"]["email"], "owner@example.com");
        assert!(json.get("monthly_rent").is_none());
    }

    #[test]
    fn test_listing_keeps_ownerless_property() {
        let property = PropertyWithOwner {
            id: PropertyId::generate(),
            name: "Sunset Villa".to_string(),
            address: "123 Beach Road, Miami, FL 33139".to_string(),
            bedrooms: 3,
            bathrooms: 2,
            monthly_rent: Rent::new(3500),
            owner: None,
        };

        let json = serde_json::to_value(&property).unwrap();
        assert!(json["owner"].is_null());
    }

    #[test]
    fn test_full_row_exposes_timestamps() {
        let now = Utc::now();
        let property = Property {
            id: PropertyId::generate(),
            owner_id: UserId::generate(),
            name: "Sunset Villa".to_string(),
            address: "123 Beach Road, Miami, FL 33139".to_string(),
            bedrooms: 3,
            bathrooms: 2,
            monthly_rent: Rent::new(3500),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&property).unwrap();
        assert!(json.get("ownerId").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }
}
