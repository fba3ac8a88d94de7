//! Authentication route handlers for the admin back office.
//!
//! A single shared-secret password gates the back office. A successful
//! check mints an opaque session token cookie; logout clears it. Failed
//! logins navigate back to the login page with an error flag - never an
//! error response.

use axum::{
    Form, Json,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::middleware::RequestCookies;
use crate::services::AuthService;
use crate::state::AppState;

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    pub password: String,
}

/// Query parameters for error display on the login page.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

/// Login page payload.
#[derive(Debug, Serialize)]
pub struct LoginPagePayload {
    pub page: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Attach a Set-Cookie header to a response.
fn with_cookie(mut response: Response, cookie: &cookie::Cookie<'static>) -> Response {
    if let Ok(value) = HeaderValue::from_str(&cookie.to_string()) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}

/// Display the login page.
///
/// GET /admin/login
///
/// An already-authenticated admin is sent straight to the dashboard.
pub async fn login_page(Query(query): Query<MessageQuery>, headers: HeaderMap) -> Response {
    let cookies = RequestCookies::parse(
        headers
            .get(header::COOKIE)
            .and_then(|h| h.to_str().ok()),
    );
    if AuthService::has_session(&cookies) {
        return Redirect::to("/admin").into_response();
    }

    Json(LoginPagePayload {
        page: "admin_login",
        error: query.error,
    })
    .into_response()
}

/// Handle login form submission.
///
/// POST /admin/login
#[instrument(skip(state, form))]
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    if state.auth().verify_password(&form.password) {
        tracing::info!("Admin login succeeded");
        let cookie = state.auth().create_session();
        with_cookie(Redirect::to("/admin").into_response(), &cookie)
    } else {
        tracing::warn!("Admin login failed");
        Redirect::to("/admin/login?error=invalid").into_response()
    }
}

/// Logout and clear the admin session.
///
/// POST /admin/logout
#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Response {
    let cookie = state.auth().destroy_session();
    with_cookie(Redirect::to("/admin/login").into_response(), &cookie)
}
