//! Prime Villa site binary.
//!
//! Serves the public landing page on port 3000.
//!
//! # Architecture
//!
//! - Axum handlers rendering Askama templates server-side
//! - `PostgreSQL` behind a lazy pool for owners and rental properties;
//!   the marketing pages render without it and the health endpoint
//!   reports `degraded` until one is attached
//! - Sentry for error reporting, wired both as tower layers and as a
//!   tracing subscriber layer

#![cfg_attr(not(test), forbid(unsafe_code))]

use prime_villa_site::config::SiteConfig;
use prime_villa_site::db;
use prime_villa_site::routes;
use prime_villa_site::state::AppState;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Start the Sentry client when a DSN is configured.
///
/// The returned guard flushes pending events on drop, so it has to
/// outlive the server.
fn init_sentry(config: &SiteConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_deref()?;

    let options = sentry::ClientOptions {
        release: sentry::release_name!(),
        environment: config
            .sentry_environment
            .clone()
            .map(std::borrow::Cow::Owned),
        sample_rate: config.sentry_sample_rate,
        traces_sample_rate: config.sentry_traces_sample_rate,
        attach_stacktrace: true,
        ..Default::default()
    };

    let guard = sentry::init((dsn, options));
    tracing::info!("Sentry client started");
    Some(guard)
}

/// Map tracing levels to what Sentry should record.
///
/// Errors and warnings become events; info and debug ride along as
/// breadcrumbs on whatever event fires next.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    use tracing::Level;

    match *metadata.level() {
        Level::ERROR | Level::WARN => sentry_tracing::EventFilter::Event,
        Level::INFO | Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Wire up the tracing subscriber, forwarding selected events to Sentry.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "prime_villa_site=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

/// Build the lazy connection pool when a database URL is present.
///
/// The site renders every page without a database; only the rental API
/// and the health check notice one is missing.
fn connect_database(config: &SiteConfig) -> Option<sqlx::PgPool> {
    let Some(url) = config.database_url.as_ref() else {
        tracing::warn!("No database URL configured, serving without rental data");
        return None;
    };

    match db::create_pool(url) {
        Ok(pool) => {
            tracing::info!("Database pool created (connections open lazily)");
            Some(pool)
        }
        Err(error) => {
            tracing::error!(%error, "Invalid database URL, serving without rental data");
            None
        }
    }
}

#[tokio::main]
async fn main() {
    // Sentry must come up before the tracing subscriber so its layer has
    // a client to report to.
    let config = SiteConfig::from_env().expect("Failed to load configuration");
    let _sentry_guard = init_sentry(&config);
    init_tracing();

    let pool = connect_database(&config);

    // Migrations never run on startup. Apply them with:
    //   cargo run -p prime-villa-cli -- migrate

    let addr = config.socket_addr();
    let state = AppState::new(config, pool);

    // Sentry layers wrap the whole router for full request coverage
    let app = routes::router(state)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!("Prime Villa site listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Resolve when the process is asked to stop (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
