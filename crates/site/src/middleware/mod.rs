//! HTTP middleware for the site.
//!
//! Applied outside-in as: Sentry layers, `TraceLayer`, request ID, then
//! security headers closest to the handlers. The binary adds the Sentry
//! layers; [`crate::routes::router`] stacks the rest.

pub mod request_id;
pub mod security_headers;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
