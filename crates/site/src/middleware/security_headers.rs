//! Response hardening applied to every route.
//!
//! The pages are public marketing content, so responses stay cacheable;
//! everything else starts locked down and loosens only when a page
//! actually needs it.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

/// First-party only. Every script, style, font, and image the site serves
/// comes off its own origin, so nothing beyond `'self'` is allowed.
const CONTENT_SECURITY_POLICY: &str = "default-src 'none'; \
     script-src 'self'; \
     style-src 'self'; \
     font-src 'self'; \
     img-src 'self'; \
     connect-src 'self'; \
     frame-src 'none'; \
     object-src 'none'; \
     base-uri 'self'; \
     form-action 'self'; \
     frame-ancestors 'none'; \
     upgrade-insecure-requests";

/// Browser features the site has no use for.
const PERMISSIONS_POLICY: &str = "accelerometer=(), \
     camera=(), \
     display-capture=(), \
     fullscreen=(), \
     geolocation=(), \
     gyroscope=(), \
     magnetometer=(), \
     microphone=(), \
     midi=(), \
     payment=(), \
     publickey-credentials-get=(), \
     screen-wake-lock=(), \
     serial=(), \
     usb=(), \
     web-share=(), \
     xr-spatial-tracking=()";

/// The full header set, fixed for the life of the process.
///
/// Names must be lowercase so [`HeaderName::from_static`] accepts them.
const RESPONSE_HEADERS: &[(&str, &str)] = &[
    // Clickjacking
    ("x-frame-options", "DENY"),
    // MIME sniffing
    ("x-content-type-options", "nosniff"),
    // Zero referrer leakage, stricter than same-origin
    ("referrer-policy", "no-referrer"),
    ("content-security-policy", CONTENT_SECURITY_POLICY),
    ("permissions-policy", PERMISSIONS_POLICY),
    // Process and resource isolation
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    // DNS prefetch leaks which links the visitor hovers over
    ("x-dns-prefetch-control", "off"),
];

/// Attach the hardening headers to every response.
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    for &(name, value) in RESPONSE_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_table_is_well_formed() {
        for &(name, value) in RESPONSE_HEADERS {
            assert_eq!(name, name.to_lowercase(), "header name must be lowercase");
            assert!(
                HeaderName::from_bytes(name.as_bytes()).is_ok(),
                "invalid header name: {name}"
            );
            assert!(
                HeaderValue::from_str(value).is_ok(),
                "invalid value for {name}"
            );
        }
    }

    #[test]
    fn test_csp_stays_first_party() {
        assert!(CONTENT_SECURITY_POLICY.contains("default-src 'none'"));
        assert!(CONTENT_SECURITY_POLICY.contains("form-action 'self'"));
        assert!(!CONTENT_SECURITY_POLICY.contains("https://"));
    }

    #[test]
    fn test_clickjacking_and_sniffing_denied() {
        let lookup = |wanted: &str| {
            RESPONSE_HEADERS
                .iter()
                .find(|(name, _)| *name == wanted)
                .map(|&(_, value)| value)
        };

        assert_eq!(lookup("x-frame-options"), Some("DENY"));
        assert_eq!(lookup("x-content-type-options"), Some("nosniff"));
    }
}
