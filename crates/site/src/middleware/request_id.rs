//! Request ID middleware for request tracing and correlation.
//!
//! Every request gets an ID that is recorded in the tracing span, tagged
//! on the Sentry scope, and echoed in the response headers, so a log
//! line, an error report, and a client-side trace can be matched up.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware that ensures every request has a unique request ID.
///
/// An `x-request-id` header set by an upstream proxy or load balancer is
/// kept; otherwise a new UUID v4 is generated.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = incoming_or_new(request.headers());

    // Record in current span for structured logging
    Span::current().record("request_id", &request_id);

    // Set in Sentry scope for error correlation
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    // Echo in response headers so clients can reference the request ID
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Keep an upstream request ID when present and printable, else mint one.
fn incoming_or_new(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_id_is_kept() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("cf-abc123"));
        assert_eq!(incoming_or_new(&headers), "cf-abc123");
    }

    #[test]
    fn test_missing_id_generates_uuid() {
        let headers = HeaderMap::new();
        let id = incoming_or_new(&headers);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_non_utf8_id_is_replaced() {
        let mut headers = HeaderMap::new();
        headers.insert(
            REQUEST_ID_HEADER,
            HeaderValue::from_bytes(b"bad\xffid").unwrap(),
        );
        let id = incoming_or_new(&headers);
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
