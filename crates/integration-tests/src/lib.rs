//! Integration tests for Volthaus.
//!
//! # Running Tests
//!
//! ```bash
//! # Run migrations and seed the catalog
//! cargo run -p volthaus-cli -- migrate
//! cargo run -p volthaus-cli -- seed
//!
//! # Start the server
//! cargo run -p volthaus-web
//!
//! # Run integration tests
//! cargo test -p volthaus-integration-tests -- --ignored
//! ```
//!
//! Tests target a running server at `VOLTHAUS_BASE_URL`
//! (default `http://localhost:3000`) and are `#[ignore]`d so a plain
//! `cargo test` stays hermetic.

/// Base URL for the server under test (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("VOLTHAUS_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// An HTTP client that does not follow redirects and keeps no cookie jar,
/// so tests can observe raw `Location` and `Set-Cookie` headers.
#[must_use]
pub fn raw_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// An HTTP client with a cookie store, for flows spanning requests.
#[must_use]
pub fn cookie_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}
