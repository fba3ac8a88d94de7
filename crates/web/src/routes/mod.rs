//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Homepage marketing sections
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (DB ping)
//!
//! # Catalog
//! GET  /products               - Product listing (brand/category/page filters)
//! GET  /products/{slug}        - Product detail
//! GET  /brands                 - Brand listing
//! GET  /brands/{slug}          - Brand detail with its products
//!
//! # Contact
//! POST /contact                - Submit a contact message
//!
//! # Entry pages (gatekeeper bounces authenticated customers to /account)
//! GET  /login                  - Login page payload
//! GET  /register               - Registration page payload
//!
//! # Account (gatekeeper requires customer_auth cookie)
//! GET  /account                - Account overview
//! GET  /account/orders         - Order history
//! GET  /account/orders/{id}    - Order detail with line items
//!
//! # Admin (gatekeeper requires admin_session cookie, except /admin/login)
//! GET  /admin                  - Dashboard counts
//! GET  /admin/login            - Login page payload
//! POST /admin/login            - Password check, sets admin_session
//! POST /admin/logout           - Clears admin_session
//! GET  /admin/messages         - Contact message moderation list
//! POST /admin/messages/{id}/status - Mark a message read/archived
//! POST /admin/messages/{id}/delete - Delete a message
//! ```

pub mod account;
pub mod admin;
pub mod auth;
pub mod brands;
pub mod contact;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{slug}", get(products::show))
}

/// Create the brand routes router.
pub fn brand_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(brands::index))
        .route("/{slug}", get(brands::show))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(account::index))
        .route("/orders", get(account::orders))
        .route("/orders/{id}", get(account::order_detail))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Homepage
        .route("/", get(home::home))
        // Catalog
        .nest("/products", product_routes())
        .nest("/brands", brand_routes())
        // Contact form
        .route("/contact", post(contact::submit))
        // Entry pages
        .route("/login", get(auth::login_page))
        .route("/register", get(auth::register_page))
        // Account area
        .nest("/account", account_routes())
        // Admin back office
        .merge(admin::router())
}
