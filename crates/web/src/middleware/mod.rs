//! HTTP middleware stack for the Volthaus server.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Security headers
//! 5. Gatekeeper (visitor session cookie + path-based auth redirects)

pub mod auth;
pub mod gatekeeper;
pub mod request_id;
pub mod security_headers;

pub use auth::{RequireAdmin, RequireCustomer};
pub use gatekeeper::{
    ADMIN_SESSION_COOKIE, CUSTOMER_AUTH_COOKIE, Gatekeeper, RequestCookies, VISITOR_COOKIE,
    gatekeeper_middleware,
};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
