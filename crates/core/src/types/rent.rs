//! Monthly rent type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Monthly rent in whole euros.
///
/// The `properties.monthly_rent` column is a plain `integer`; rents are
/// quoted per month in whole EUR with no sub-unit precision, so no decimal
/// arithmetic is needed anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rent(i32);

impl Rent {
    /// Create a rent from a whole-euro amount.
    #[must_use]
    pub const fn new(amount: i32) -> Self {
        Self(amount)
    }

    /// Get the monthly amount in whole euros.
    #[must_use]
    pub const fn amount(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Rent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} EUR", self.0)
    }
}

impl From<i32> for Rent {
    fn from(amount: i32) -> Self {
        Self(amount)
    }
}

impl From<Rent> for i32 {
    fn from(rent: Rent) -> Self {
        rent.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_roundtrip() {
        let rent = Rent::new(3500);
        assert_eq!(rent.amount(), 3500);
        assert_eq!(i32::from(rent), 3500);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rent::new(700).to_string(), "700 EUR");
    }

    #[test]
    fn test_ordering() {
        assert!(Rent::new(700) < Rent::new(3500));
    }

    #[test]
    fn test_serde_is_a_bare_number() {
        let rent = Rent::new(3500);
        let json = serde_json::to_string(&rent).unwrap();
        assert_eq!(json, "3500");

        let parsed: Rent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rent);
    }
}
