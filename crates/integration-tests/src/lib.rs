//! Integration tests for Prime Villa.
//!
//! # Running Tests
//!
//! ```bash
//! # In-process tests (no server or database required)
//! cargo test -p prime-villa-integration-tests
//!
//! # Live tests against a running site
//! cargo run -p prime-villa-cli -- migrate
//! cargo run -p prime-villa-cli -- seed
//! cargo run -p prime-villa-site &
//! cargo test -p prime-villa-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `home_page` - Full landing page template rendering
//! - `health_contract` - Health report status folding and JSON shape
//! - `live_site` - HTTP tests against a running site (`#[ignore]`d by default)
