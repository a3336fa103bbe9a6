//! Error reporting diagnostics.
//!
//! Manual triggers for verifying the Sentry wiring end to end: one
//! button captures an info message, the other a synthetic error. The
//! page is served under `/debug` and is not linked from public pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use thiserror::Error;
use tracing::instrument;

use crate::filters;
use crate::routes::PageChrome;
use crate::state::AppState;

/// Synthetic error used to verify exception capture.
#[derive(Debug, Error)]
#[error("Test manual exception from diagnostics page")]
struct DiagnosticError;

/// Diagnostics page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/diagnostics.html")]
pub struct DiagnosticsTemplate {
    pub chrome: PageChrome,
    pub dsn_configured: bool,
}

/// Render the diagnostics page.
#[instrument(skip(state))]
pub async fn page(State(state): State<AppState>) -> impl IntoResponse {
    DiagnosticsTemplate {
        chrome: PageChrome::new(),
        dsn_configured: state.config().sentry_dsn.is_some(),
    }
}

/// Capture a test message at info level.
#[instrument]
pub async fn capture_message() -> &'static str {
    sentry::capture_message(
        "Test manual message from diagnostics page",
        sentry::Level::Info,
    );
    "message captured"
}

/// Capture a synthetic exception.
#[instrument]
pub async fn capture_error() -> &'static str {
    sentry::capture_error(&DiagnosticError);
    "error captured"
}
