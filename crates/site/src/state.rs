//! Shared state handed to every request handler.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::SiteConfig;

/// Handler state: configuration plus the optional database pool.
///
/// Cloning is cheap (a single `Arc` bump), which is what axum does for
/// every request.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    config: SiteConfig,
    pool: Option<PgPool>,
}

impl AppState {
    /// Bundle the configuration and pool for the router.
    ///
    /// `pool` is `None` when no database URL is configured; the site
    /// still serves its pages and reports `degraded` health.
    #[must_use]
    pub fn new(config: SiteConfig, pool: Option<PgPool>) -> Self {
        let inner = Inner { config, pool };
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Site configuration as loaded at startup.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Database pool, absent when the site runs without one.
    #[must_use]
    pub fn pool(&self) -> Option<&PgPool> {
        self.inner.pool.as_ref()
    }
}
