//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page
//! GET  /health                 - Health check (JSON)
//! GET  /search                 - Villa search submission (logs and redirects)
//!
//! # Rental data API
//! GET  /api/properties         - Property listing with owners (JSON)
//! GET  /api/properties/{id}    - Single property (JSON)
//!
//! # Diagnostics (not linked from public pages)
//! GET  /debug/sentry           - Error reporting test page
//! POST /debug/sentry/message   - Capture a test message
//! POST /debug/sentry/error     - Capture a test error
//! ```

pub mod api;
pub mod diagnostics;
pub mod health;
pub mod home;
pub mod search;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::content::{self, FooterContent, NavLink};
use crate::middleware::{request_id_middleware, security_headers_middleware};
use crate::state::AppState;

/// Header and footer data shared by every page template.
pub struct PageChrome {
    pub nav_links: &'static [NavLink],
    pub locale_label: &'static str,
    pub cta_label: &'static str,
    pub cta_href: &'static str,
    pub footer: &'static FooterContent,
}

impl PageChrome {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nav_links: content::NAV_LINKS,
            locale_label: content::LOCALE_LABEL,
            cta_label: content::BOOKING_CTA_LABEL,
            cta_href: content::BOOKING_CTA_HREF,
            footer: &content::FOOTER,
        }
    }
}

impl Default for PageChrome {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the rental data API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/properties", get(api::list_properties))
        .route("/properties/{id}", get(api::get_property))
}

/// Create the diagnostics routes router.
pub fn diagnostics_routes() -> Router<AppState> {
    Router::new()
        .route("/sentry", get(diagnostics::page))
        .route("/sentry/message", post(diagnostics::capture_message))
        .route("/sentry/error", post(diagnostics::capture_error))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Landing page
        .route("/", get(home::home))
        // Health check
        .route("/health", get(health::health))
        // Search submission
        .route("/search", get(search::search))
        // Rental data API
        .nest("/api", api_routes())
        // Diagnostics
        .nest("/debug", diagnostics_routes())
}

/// Build the complete application router with middleware and static files.
///
/// The Sentry tower layers are added by the binary, which owns the
/// Sentry client guard.
pub fn router(state: AppState) -> Router {
    routes()
        .nest_service("/static", ServeDir::new("crates/site/static"))
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
