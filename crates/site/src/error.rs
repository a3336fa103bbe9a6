//! Application errors and their HTTP mapping.
//!
//! Route handlers return [`AppError`]; turning one into a response picks
//! the status code, swaps server-side detail for a generic message, and
//! reports server faults to Sentry before anything reaches the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Repository operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request was malformed.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The site is running without a required backing service.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Unexpected server-side failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether this error is the server's fault and belongs in Sentry.
    #[must_use]
    pub const fn is_server_fault(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Internal(_))
    }

    /// HTTP status code this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Client-facing message. Server faults collapse to a generic line;
    /// the detail stays in logs and Sentry.
    #[must_use]
    pub fn public_message(&self) -> String {
        if self.is_server_fault() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_fault() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(error = %self, sentry_event_id = %event_id, "Request failed");
        }

        let body = Json(serde_json::json!({ "error": self.public_message() }));
        (self.status(), body).into_response()
    }
}

/// Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;

/// Record a user action as a Sentry breadcrumb.
///
/// Breadcrumbs show up on error reports as the trail of actions that led
/// to the failure. Pass an empty slice when there is nothing to attach.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("search", "Submitted villa search", &[("adults", "2")]);
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: &[(&str, &str)]) {
    let data = data
        .iter()
        .map(|(key, value)| {
            (
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            )
        })
        .collect();

    sentry::add_breadcrumb(sentry::protocol::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        data,
        ..Default::default()
    });
}
