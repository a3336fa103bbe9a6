//! Domain models for rental data served by the site.

pub mod property;

pub use property::{OwnerSummary, Property, PropertyWithOwner};
