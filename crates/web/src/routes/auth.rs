//! Customer entry-page route handlers.
//!
//! Customer authentication itself lives in an external identity service that
//! issues the `customer_auth` cookie; this server only renders the entry
//! pages and lets the gatekeeper bounce already-authenticated customers to
//! their account.

use axum::{Json, extract::Query, response::IntoResponse};
use serde::{Deserialize, Serialize};

/// Query parameters for the login page.
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    /// Destination to return to after login, set by the gatekeeper when it
    /// redirects an unauthenticated request away from the account area.
    pub next: Option<String>,
}

/// Entry page payload.
#[derive(Debug, Serialize)]
pub struct EntryPagePayload {
    pub page: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Display the login page.
///
/// GET /login
pub async fn login_page(Query(query): Query<LoginQuery>) -> impl IntoResponse {
    Json(EntryPagePayload {
        page: "login",
        next: query.next,
    })
}

/// Display the registration page.
///
/// GET /register
pub async fn register_page() -> impl IntoResponse {
    Json(EntryPagePayload {
        page: "register",
        next: None,
    })
}
