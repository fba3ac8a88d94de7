//! Admin back-office route handlers.
//!
//! Everything here sits behind the gatekeeper's `/admin` rule: requests
//! without a non-empty `admin_session` cookie never reach these handlers
//! (except the login page). Handlers still take [`RequireAdmin`] so each
//! protected endpoint states its requirement locally.
//!
//! [`RequireAdmin`]: crate::middleware::RequireAdmin

pub mod auth;
pub mod dashboard;
pub mod messages;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the admin router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(dashboard::index))
        .route("/admin/login", get(auth::login_page).post(auth::login))
        .route("/admin/logout", post(auth::logout))
        .route("/admin/messages", get(messages::list))
        .route("/admin/messages/{id}/status", post(messages::set_status))
        .route("/admin/messages/{id}/delete", post(messages::delete))
}
