//! End-to-end tests for the request gatekeeper.
//!
//! These tests require a running server (cargo run -p volthaus-web) with a
//! migrated database. Run with: cargo test -p volthaus-integration-tests -- --ignored

use reqwest::StatusCode;
use uuid::Uuid;

use volthaus_integration_tests::{base_url, raw_client};

/// Extract the value of a named cookie from all Set-Cookie response headers.
fn set_cookie_value(response: &reqwest::Response, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .find_map(|header| {
            let (pair, _) = header.split_once(';').unwrap_or((header, ""));
            let (cookie_name, value) = pair.split_once('=')?;
            (cookie_name.trim() == name).then(|| value.to_string())
        })
}

/// Whether a string is a canonical hyphenated UUID.
fn is_canonical_uuid(value: &str) -> bool {
    value.len() == 36 && Uuid::parse_str(value).is_ok()
}

// ============================================================================
// Visitor session assignment
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_first_visit_assigns_session_cookie() {
    let client = raw_client();
    let resp = client
        .get(format!("{}/", base_url()))
        .send()
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(resp.status(), StatusCode::OK);
    let session = set_cookie_value(&resp, "session_id").expect("session_id cookie");
    assert!(is_canonical_uuid(&session));
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_malformed_session_cookie_is_replaced() {
    let client = raw_client();
    let resp = client
        .get(format!("{}/products", base_url()))
        .header("Cookie", "session_id=not-a-uuid")
        .send()
        .await
        .expect("Failed to fetch products");

    let session = set_cookie_value(&resp, "session_id").expect("replacement cookie");
    assert!(is_canonical_uuid(&session));
    assert_ne!(session, "not-a-uuid");
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_valid_session_cookie_passes_through() {
    let client = raw_client();
    let resp = client
        .get(format!("{}/", base_url()))
        .header("Cookie", "session_id=550e8400-e29b-41d4-a716-446655440000")
        .send()
        .await
        .expect("Failed to fetch homepage");

    assert!(set_cookie_value(&resp, "session_id").is_none());
}

// ============================================================================
// Admin area gating
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_admin_area_redirects_without_session() {
    let client = raw_client();
    let resp = client
        .get(format!("{}/admin/messages", base_url()))
        .send()
        .await
        .expect("Failed to fetch admin page");

    assert!(resp.status().is_redirection());
    assert_eq!(
        resp.headers()
            .get(reqwest::header::LOCATION)
            .and_then(|h| h.to_str().ok()),
        Some("/admin/login")
    );
    // The visitor session cookie is attached even on the redirect
    assert!(set_cookie_value(&resp, "session_id").is_some());
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_admin_area_admits_any_nonempty_cookie() {
    // Presence-based authentication: the token value is never validated.
    let client = raw_client();
    let resp = client
        .get(format!("{}/admin", base_url()))
        .header("Cookie", "admin_session=anything")
        .send()
        .await
        .expect("Failed to fetch dashboard");

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_admin_login_page_is_public() {
    let client = raw_client();
    let resp = client
        .get(format!("{}/admin/login", base_url()))
        .send()
        .await
        .expect("Failed to fetch login page");

    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Account area gating
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_account_redirects_to_login_with_next() {
    let client = raw_client();
    let resp = client
        .get(format!("{}/account/orders?page=2", base_url()))
        .send()
        .await
        .expect("Failed to fetch account page");

    assert!(resp.status().is_redirection());
    assert_eq!(
        resp.headers()
            .get(reqwest::header::LOCATION)
            .and_then(|h| h.to_str().ok()),
        Some("/login?next=%2Faccount%2Forders%3Fpage%3D2")
    );
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_account_admits_customer_cookie() {
    let client = raw_client();
    let resp = client
        .get(format!("{}/account", base_url()))
        .header("Cookie", "customer_auth=cust-integration")
        .send()
        .await
        .expect("Failed to fetch account page");

    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Entry page bounce
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_login_page_bounces_authenticated_customer() {
    let client = raw_client();
    for path in ["/login", "/register"] {
        let resp = client
            .get(format!("{}{path}", base_url()))
            .header("Cookie", "customer_auth=cust-integration")
            .send()
            .await
            .expect("Failed to fetch entry page");

        assert!(resp.status().is_redirection(), "{path}");
        assert_eq!(
            resp.headers()
                .get(reqwest::header::LOCATION)
                .and_then(|h| h.to_str().ok()),
            Some("/account"),
            "{path}"
        );
    }
}

// ============================================================================
// Exclusions
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_static_paths_bypass_gatekeeper() {
    let client = raw_client();
    let resp = client
        .get(format!("{}/static/chunk.js", base_url()))
        .send()
        .await
        .expect("Failed to fetch static path");

    // No cookie is set and no redirect occurs, whatever the status
    assert!(!resp.status().is_redirection());
    assert!(set_cookie_value(&resp, "session_id").is_none());
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_health_bypasses_gatekeeper() {
    let client = raw_client();
    let resp = client
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to fetch health");

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(set_cookie_value(&resp, "session_id").is_none());
}
