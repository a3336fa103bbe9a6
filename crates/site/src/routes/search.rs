//! Villa search form submission.
//!
//! The hero form collects dates and party size, but there is no search
//! backend: the handler records what was asked for and sends the visitor
//! back to the landing page. Parameters are logged, never persisted.

use axum::{
    extract::Query,
    response::Redirect,
};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use tracing::{info, instrument};

use crate::error::add_breadcrumb;

/// Query parameters submitted by the hero search form.
#[derive(Debug, PartialEq, Eq, Deserialize)]
pub struct SearchParams {
    /// Check-in date; the form submits an empty string until a date is picked.
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub check_in: Option<NaiveDate>,
    /// Check-out date, same convention as `check_in`.
    #[serde(default, deserialize_with = "empty_date_as_none")]
    pub check_out: Option<NaiveDate>,
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
}

const fn default_adults() -> u32 {
    1
}

/// Treat an absent or empty date field as "not chosen".
fn empty_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Handle a search submission: log it and return to the landing page.
#[instrument]
pub async fn search(Query(params): Query<SearchParams>) -> Redirect {
    info!(
        check_in = ?params.check_in,
        check_out = ?params.check_out,
        adults = params.adults,
        children = params.children,
        "Villa search submitted"
    );

    let adults = params.adults.to_string();
    let children = params.children.to_string();
    add_breadcrumb(
        "search",
        "Submitted villa search",
        &[("adults", &adults), ("children", &children)],
    );

    Redirect::to("/")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::Uri;

    fn parse(uri: &str) -> Result<SearchParams, axum::extract::rejection::QueryRejection> {
        let uri = uri.parse::<Uri>().unwrap();
        Query::<SearchParams>::try_from_uri(&uri).map(|Query(params)| params)
    }

    #[test]
    fn test_filled_form_round_trips() {
        let params = parse("/search?check_in=2025-10-21&check_out=&adults=2&children=1").unwrap();
        assert_eq!(
            params.check_in,
            Some(NaiveDate::from_ymd_opt(2025, 10, 21).unwrap())
        );
        assert_eq!(params.check_out, None);
        assert_eq!(params.adults, 2);
        assert_eq!(params.children, 1);
    }

    #[test]
    fn test_untouched_form_uses_defaults() {
        let params = parse("/search").unwrap();
        assert_eq!(params.check_in, None);
        assert_eq!(params.check_out, None);
        assert_eq!(params.adults, 1);
        assert_eq!(params.children, 0);
    }

    #[test]
    fn test_both_dates_parse_when_chosen() {
        let params = parse("/search?check_in=2025-10-21&check_out=2025-10-25").unwrap();
        assert!(params.check_in.is_some());
        assert!(params.check_out.is_some());
    }

    #[test]
    fn test_unparseable_date_is_rejected() {
        assert!(parse("/search?check_in=21.10.25").is_err());
    }
}
