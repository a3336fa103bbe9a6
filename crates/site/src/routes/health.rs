//! Health check endpoint.
//!
//! Reports overall service health plus a database sub-check. A site
//! running without a configured database is `degraded`, not broken: the
//! marketing pages still render, so the endpoint answers 200 and leaves
//! the explanation in the database check. Only a configured-but-failing
//! database makes the service `unhealthy` (503).

use std::time::Instant;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use tracing::instrument;

use crate::state::AppState;

/// Three-state health level used for the service and each sub-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthStatus {
    /// HTTP status for a report with this overall level.
    ///
    /// Degraded still answers 200: the site is serving pages, just
    /// without rental data.
    #[must_use]
    pub const fn http_status(self) -> StatusCode {
        match self {
            Self::Healthy | Self::Degraded => StatusCode::OK,
            Self::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Database connectivity sub-check.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseCheck {
    pub status: HealthStatus,
    /// Elapsed milliseconds for the round-trip (or for deciding to skip it).
    pub response_time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Sub-check container, one entry per dependency.
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: DatabaseCheck,
}

/// Full health report returned by `GET /health`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
    pub deployment_id: String,
    pub environment: String,
    pub checks: HealthChecks,
}

/// Fallback body when evaluating the report itself fails.
#[derive(Debug, Serialize)]
struct HealthFailure {
    status: HealthStatus,
    timestamp: DateTime<Utc>,
    error: String,
}

/// Run the database sub-check.
///
/// No pool means no `DATABASE_URL` was configured; that is a valid
/// deployment, reported as `degraded`. A failing round-trip reports
/// `unhealthy` with the driver error text.
pub async fn check_database(pool: Option<&PgPool>) -> DatabaseCheck {
    let start = Instant::now();

    let Some(pool) = pool else {
        return DatabaseCheck {
            status: HealthStatus::Degraded,
            response_time: elapsed_ms(start),
            error: Some("DATABASE_URL not configured".to_string()),
        };
    };

    match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await {
        Ok(_) => DatabaseCheck {
            status: HealthStatus::Healthy,
            response_time: elapsed_ms(start),
            error: None,
        },
        Err(e) => DatabaseCheck {
            status: HealthStatus::Unhealthy,
            response_time: elapsed_ms(start),
            error: Some(e.to_string()),
        },
    }
}

/// Overall status is exactly the database sub-check status.
const fn overall_status(database: &DatabaseCheck) -> HealthStatus {
    database.status
}

/// Evaluate the full health report.
pub async fn evaluate(state: &AppState) -> HealthReport {
    let database = check_database(state.pool()).await;
    let status = overall_status(&database);

    HealthReport {
        status,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        deployment_id: state.config().deployment_id.clone(),
        environment: state.config().environment.clone(),
        checks: HealthChecks { database },
    }
}

/// Health check handler.
///
/// Evaluation runs in its own task so that a panic inside a check
/// still produces a well-formed 503 instead of tearing down the
/// connection.
#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> Response {
    let task_state = state.clone();
    match tokio::spawn(async move { evaluate(&task_state).await }).await {
        Ok(report) => {
            let code = report.status.http_status();
            (code, Json(report)).into_response()
        }
        Err(join_error) => {
            tracing::error!(error = %join_error, "Health evaluation failed");
            let failure = HealthFailure {
                status: HealthStatus::Unhealthy,
                timestamp: Utc::now(),
                error: join_error.to_string(),
            };
            (StatusCode::SERVICE_UNAVAILABLE, Json(failure)).into_response()
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_pool_is_degraded() {
        let check = check_database(None).await;
        assert_eq!(check.status, HealthStatus::Degraded);
        assert_eq!(check.error.as_deref(), Some("DATABASE_URL not configured"));
    }

    #[test]
    fn test_overall_tracks_database_check() {
        for status in [
            HealthStatus::Healthy,
            HealthStatus::Degraded,
            HealthStatus::Unhealthy,
        ] {
            let check = DatabaseCheck {
                status,
                response_time: 1,
                error: None,
            };
            assert_eq!(overall_status(&check), status);
        }
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(HealthStatus::Healthy.http_status(), StatusCode::OK);
        assert_eq!(HealthStatus::Degraded.http_status(), StatusCode::OK);
        assert_eq!(
            HealthStatus::Unhealthy.http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = HealthReport {
            status: HealthStatus::Degraded,
            timestamp: Utc::now(),
            version: "0.1.0",
            deployment_id: "local".to_string(),
            environment: "development".to_string(),
            checks: HealthChecks {
                database: DatabaseCheck {
                    status: HealthStatus::Degraded,
                    response_time: 0,
                    error: Some("DATABASE_URL not configured".to_string()),
                },
            },
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["deploymentId"], "local");
        assert!(json["checks"]["database"]["responseTime"].is_number());
        assert_eq!(
            json["checks"]["database"]["error"],
            "DATABASE_URL not configured"
        );
    }

    #[test]
    fn test_healthy_check_omits_error_key() {
        let check = DatabaseCheck {
            status: HealthStatus::Healthy,
            response_time: 3,
            error: None,
        };

        let json = serde_json::to_value(&check).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["responseTime"], 3);
    }
}
