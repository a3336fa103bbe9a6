//! Askama template filters.
//!
//! Build-time helpers used by the base layout: the hashed stylesheet
//! URL and the closing year of the footer copyright range.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Content hash of `main.css`, computed by the build script.
///
/// Usage: `/static/css/derived/main.{{ ""|css_hash }}.css`
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Current year, closing the copyright range in the footer.
///
/// Usage: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
