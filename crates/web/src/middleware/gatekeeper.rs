//! Request gatekeeper: visitor session assignment and path-based access control.
//!
//! Runs once per request before any route handler. Two independent
//! responsibilities:
//!
//! 1. Every visitor carries a `session_id` cookie holding a canonical UUID;
//!    requests arriving without one (or with a malformed value) get a fresh
//!    id attached to the response. The id is a correlation token only, never
//!    an authorization credential.
//! 2. Coarse path-based access control for two identity domains: the admin
//!    back office (`/admin/*`) and the customer account area (`/account`).
//!    Authentication here is cookie *presence* - there is no server-side
//!    session record backing either cookie.
//!
//! The decision core is pure: it takes the request path/query and an
//! immutable cookie mapping, and returns at most one outgoing cookie
//! directive plus a continue-or-redirect action. The axum adapter at the
//! bottom of this file is the only framework-aware piece.

use std::collections::HashMap;

use axum::{
    extract::{Request, State},
    http::{HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use cookie::{Cookie, SameSite, time::Duration};
use uuid::Uuid;

use crate::state::AppState;

/// Anonymous visitor session cookie (correlation id, not a credential).
pub const VISITOR_COOKIE: &str = "session_id";

/// Admin back-office session cookie.
pub const ADMIN_SESSION_COOKIE: &str = "admin_session";

/// Customer authentication cookie, issued by the external identity
/// collaborator and only read here.
pub const CUSTOMER_AUTH_COOKIE: &str = "customer_auth";

/// Visitor session cookie lifetime.
const VISITOR_TTL_DAYS: i64 = 30;

const ADMIN_PREFIX: &str = "/admin";
const ADMIN_LOGIN_PATH: &str = "/admin/login";
const ACCOUNT_PATH: &str = "/account";
const LOGIN_PATH: &str = "/login";
const REGISTER_PATH: &str = "/register";

/// Path prefixes the gatekeeper never touches: no cookie write, no redirect.
const EXCLUDED_PREFIXES: &[&str] = &["/static/", "/health"];

/// Exact paths the gatekeeper never touches.
const EXCLUDED_PATHS: &[&str] = &["/favicon.ico"];

// =============================================================================
// Cookie value objects
// =============================================================================

/// Immutable view of the cookies that arrived with a request.
#[derive(Debug, Default)]
pub struct RequestCookies(HashMap<String, String>);

impl RequestCookies {
    /// Parse a `Cookie` request header. Malformed pairs are skipped.
    #[must_use]
    pub fn parse(header: Option<&str>) -> Self {
        let Some(header) = header else {
            return Self::default();
        };
        let map = Cookie::split_parse(header.to_owned())
            .filter_map(Result::ok)
            .map(|c| (c.name().to_owned(), c.value().to_owned()))
            .collect();
        Self(map)
    }

    /// Build a cookie set from name/value pairs (used by tests).
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Get a cookie value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether a cookie is present with a non-empty value.
    #[must_use]
    pub fn has_non_empty(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_empty())
    }
}

/// What to do with the request after gatekeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hand the request to the matched route.
    Continue,
    /// Short-circuit with a redirect; no route logic runs.
    Redirect(String),
}

/// The gatekeeper's verdict for one request.
#[derive(Debug)]
pub struct Decision {
    /// Fresh visitor session cookie to attach, if the incoming one was
    /// absent or malformed. At most one cookie write per request.
    pub visitor_cookie: Option<Cookie<'static>>,
    /// Continue or redirect.
    pub action: Action,
}

// =============================================================================
// Decision core
// =============================================================================

/// Pure per-request decision logic. Stateless; safe to rebuild per request.
#[derive(Debug, Clone, Copy)]
pub struct Gatekeeper {
    /// Set the `Secure` flag on cookies (true when serving over HTTPS).
    secure_cookies: bool,
}

impl Gatekeeper {
    /// Create a gatekeeper.
    #[must_use]
    pub const fn new(secure_cookies: bool) -> Self {
        Self { secure_cookies }
    }

    /// Evaluate one request.
    ///
    /// The visitor-session check always runs first and is independent of the
    /// three authorization rules; its cookie directive is attached even when
    /// the action is a redirect. The authorization rules are mutually
    /// exclusive by path shape and the first match wins.
    #[must_use]
    pub fn evaluate(&self, path: &str, query: Option<&str>, cookies: &RequestCookies) -> Decision {
        if is_excluded_path(path) {
            return Decision {
                visitor_cookie: None,
                action: Action::Continue,
            };
        }

        Decision {
            visitor_cookie: self.ensure_visitor_session(cookies),
            action: authorize(path, query, cookies),
        }
    }

    /// Return a fresh visitor cookie when the incoming one is absent or
    /// fails the canonical UUID pattern check. A malformed value is silently
    /// replaced, never surfaced as an error.
    fn ensure_visitor_session(&self, cookies: &RequestCookies) -> Option<Cookie<'static>> {
        if cookies.get(VISITOR_COOKIE).is_some_and(is_valid_uuid) {
            return None;
        }

        let mut cookie = Cookie::new(VISITOR_COOKIE, Uuid::new_v4().to_string());
        cookie.set_http_only(true);
        cookie.set_same_site(SameSite::Lax);
        cookie.set_path("/");
        cookie.set_max_age(Duration::days(VISITOR_TTL_DAYS));
        cookie.set_secure(self.secure_cookies);
        Some(cookie)
    }
}

/// Path-based authorization. Rules in order; the first matching redirect
/// terminates processing.
fn authorize(path: &str, query: Option<&str>, cookies: &RequestCookies) -> Action {
    // Admin area: everything under the prefix except the login page itself.
    if path.starts_with(ADMIN_PREFIX) && path != ADMIN_LOGIN_PATH {
        if cookies.has_non_empty(ADMIN_SESSION_COOKIE) {
            return Action::Continue;
        }
        return Action::Redirect(ADMIN_LOGIN_PATH.to_owned());
    }

    // Customer account area: capture the original destination so the login
    // flow can return the user there.
    if path == ACCOUNT_PATH || path.starts_with("/account/") {
        if cookies.has_non_empty(CUSTOMER_AUTH_COOKIE) {
            return Action::Continue;
        }
        return Action::Redirect(login_redirect_target(path, query));
    }

    // Entry pages: bounce already-authenticated customers back to their
    // account (a UX rule, not a security control).
    if (path == LOGIN_PATH || path == REGISTER_PATH)
        && cookies.has_non_empty(CUSTOMER_AUTH_COOKIE)
    {
        return Action::Redirect(ACCOUNT_PATH.to_owned());
    }

    Action::Continue
}

/// Build the login redirect carrying the original path and query.
pub(crate) fn login_redirect_target(path: &str, query: Option<&str>) -> String {
    let original = match query {
        Some(q) if !q.is_empty() => format!("{path}?{q}"),
        _ => path.to_owned(),
    };
    format!("{LOGIN_PATH}?next={}", urlencoding::encode(&original))
}

/// Whether a path bypasses the gatekeeper entirely.
#[must_use]
pub fn is_excluded_path(path: &str) -> bool {
    EXCLUDED_PATHS.contains(&path)
        || EXCLUDED_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
}

/// Check a string against the canonical UUID pattern: 8-4-4-4-12 hexadecimal
/// groups, case-insensitive.
///
/// `Uuid::parse_str` also accepts the simple, braced, and URN forms, which
/// the cookie must not carry, so the shape is checked byte by byte.
#[must_use]
pub fn is_valid_uuid(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 36 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, &b)| match i {
        8 | 13 | 18 | 23 => b == b'-',
        _ => b.is_ascii_hexdigit(),
    })
}

// =============================================================================
// Axum adapter
// =============================================================================

/// Per-request middleware wiring the decision core into the router.
pub async fn gatekeeper_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let gatekeeper = Gatekeeper::new(state.config().is_production());
    let cookies = RequestCookies::parse(
        request
            .headers()
            .get(header::COOKIE)
            .and_then(|h| h.to_str().ok()),
    );

    let decision = gatekeeper.evaluate(request.uri().path(), request.uri().query(), &cookies);

    let mut response = match decision.action {
        Action::Continue => next.run(request).await,
        Action::Redirect(location) => Redirect::to(&location).into_response(),
    };

    if let Some(cookie) = decision.visitor_cookie
        && let Ok(value) = HeaderValue::from_str(&cookie.to_string())
    {
        response.headers_mut().append(header::SET_COOKIE, value);
    }

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn gatekeeper() -> Gatekeeper {
        Gatekeeper::new(false)
    }

    fn no_cookies() -> RequestCookies {
        RequestCookies::default()
    }

    // -------------------------------------------------------------------------
    // UUID pattern
    // -------------------------------------------------------------------------

    #[test]
    fn test_valid_uuid_canonical() {
        assert!(is_valid_uuid("550e8400-e29b-41d4-a716-446655440000"));
        // Case-insensitive
        assert!(is_valid_uuid("550E8400-E29B-41D4-A716-446655440000"));
    }

    #[test]
    fn test_invalid_uuid_shapes() {
        assert!(!is_valid_uuid(""));
        assert!(!is_valid_uuid("not-a-uuid"));
        // Simple form (no hyphens) is rejected even though it parses as a UUID
        assert!(!is_valid_uuid("550e8400e29b41d4a716446655440000"));
        // Braced form
        assert!(!is_valid_uuid("{550e8400-e29b-41d4-a716-446655440000}"));
        // Hyphens in the wrong positions
        assert!(!is_valid_uuid("550e84-00e29b-41d4-a716-446655440000"));
        // Non-hex character
        assert!(!is_valid_uuid("550e8400-e29b-41d4-a716-44665544000g"));
    }

    // -------------------------------------------------------------------------
    // Visitor session assignment
    // -------------------------------------------------------------------------

    #[test]
    fn test_missing_visitor_cookie_gets_fresh_id() {
        let decision = gatekeeper().evaluate("/", None, &no_cookies());
        let cookie = decision.visitor_cookie.expect("fresh cookie");
        assert_eq!(cookie.name(), VISITOR_COOKIE);
        assert!(is_valid_uuid(cookie.value()));
        assert_eq!(decision.action, Action::Continue);
    }

    #[test]
    fn test_malformed_visitor_cookie_silently_replaced() {
        let cookies = RequestCookies::from_pairs([(VISITOR_COOKIE, "garbage")]);
        let decision = gatekeeper().evaluate("/products", None, &cookies);
        let cookie = decision.visitor_cookie.expect("replacement cookie");
        assert!(is_valid_uuid(cookie.value()));
    }

    #[test]
    fn test_valid_visitor_cookie_passes_through() {
        let cookies =
            RequestCookies::from_pairs([(VISITOR_COOKIE, "550e8400-e29b-41d4-a716-446655440000")]);
        let decision = gatekeeper().evaluate("/", None, &cookies);
        assert!(decision.visitor_cookie.is_none());
    }

    #[test]
    fn test_visitor_cookie_attributes() {
        let decision = Gatekeeper::new(true).evaluate("/", None, &no_cookies());
        let rendered = decision.visitor_cookie.unwrap().to_string();
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("SameSite=Lax"));
        assert!(rendered.contains("Secure"));
        assert!(rendered.contains("Path=/"));
        // 30 days
        assert!(rendered.contains("Max-Age=2592000"));
    }

    #[test]
    fn test_visitor_cookie_not_secure_in_development() {
        let decision = Gatekeeper::new(false).evaluate("/", None, &no_cookies());
        let rendered = decision.visitor_cookie.unwrap().to_string();
        assert!(!rendered.contains("Secure"));
    }

    // -------------------------------------------------------------------------
    // Admin area
    // -------------------------------------------------------------------------

    #[test]
    fn test_admin_path_without_session_redirects_to_login() {
        let decision = gatekeeper().evaluate("/admin/messages", None, &no_cookies());
        assert_eq!(
            decision.action,
            Action::Redirect("/admin/login".to_owned())
        );
    }

    #[test]
    fn test_admin_path_with_session_continues() {
        let cookies = RequestCookies::from_pairs([(ADMIN_SESSION_COOKIE, "tok-123")]);
        let decision = gatekeeper().evaluate("/admin/messages", None, &cookies);
        assert_eq!(decision.action, Action::Continue);
    }

    #[test]
    fn test_admin_login_page_is_reachable_without_session() {
        let decision = gatekeeper().evaluate("/admin/login", None, &no_cookies());
        assert_eq!(decision.action, Action::Continue);
    }

    #[test]
    fn test_admin_empty_cookie_value_is_not_a_session() {
        let cookies = RequestCookies::from_pairs([(ADMIN_SESSION_COOKIE, "")]);
        let decision = gatekeeper().evaluate("/admin", None, &cookies);
        assert_eq!(
            decision.action,
            Action::Redirect("/admin/login".to_owned())
        );
    }

    // -------------------------------------------------------------------------
    // Account area
    // -------------------------------------------------------------------------

    #[test]
    fn test_account_without_auth_redirects_with_next() {
        let decision = gatekeeper().evaluate("/account/orders", Some("page=2"), &no_cookies());
        assert_eq!(
            decision.action,
            Action::Redirect("/login?next=%2Faccount%2Forders%3Fpage%3D2".to_owned())
        );
    }

    #[test]
    fn test_account_root_without_auth_redirects() {
        let decision = gatekeeper().evaluate("/account", None, &no_cookies());
        assert_eq!(
            decision.action,
            Action::Redirect("/login?next=%2Faccount".to_owned())
        );
    }

    #[test]
    fn test_account_with_auth_continues() {
        let cookies = RequestCookies::from_pairs([(CUSTOMER_AUTH_COOKIE, "cust-abc")]);
        let decision = gatekeeper().evaluate("/account", None, &cookies);
        assert_eq!(decision.action, Action::Continue);
    }

    #[test]
    fn test_account_prefix_requires_separator() {
        // "/accounting" is not the account area
        let decision = gatekeeper().evaluate("/accounting", None, &no_cookies());
        assert_eq!(decision.action, Action::Continue);
    }

    // -------------------------------------------------------------------------
    // Entry pages
    // -------------------------------------------------------------------------

    #[test]
    fn test_login_page_bounces_authenticated_customer() {
        let cookies = RequestCookies::from_pairs([(CUSTOMER_AUTH_COOKIE, "cust-abc")]);
        for path in ["/login", "/register"] {
            let decision = gatekeeper().evaluate(path, None, &cookies);
            assert_eq!(decision.action, Action::Redirect("/account".to_owned()));
        }
    }

    #[test]
    fn test_login_page_serves_anonymous_visitors() {
        let decision = gatekeeper().evaluate("/login", None, &no_cookies());
        assert_eq!(decision.action, Action::Continue);
    }

    // -------------------------------------------------------------------------
    // Ordering and exclusions
    // -------------------------------------------------------------------------

    #[test]
    fn test_visitor_cookie_attached_even_on_redirect() {
        let decision = gatekeeper().evaluate("/admin/messages", None, &no_cookies());
        assert!(matches!(decision.action, Action::Redirect(_)));
        assert!(decision.visitor_cookie.is_some());
    }

    #[test]
    fn test_static_assets_bypass_everything() {
        let decision = gatekeeper().evaluate("/static/chunk.js", None, &no_cookies());
        assert!(decision.visitor_cookie.is_none());
        assert_eq!(decision.action, Action::Continue);
    }

    #[test]
    fn test_favicon_and_health_bypass_everything() {
        for path in ["/favicon.ico", "/health", "/health/ready"] {
            let decision = gatekeeper().evaluate(path, None, &no_cookies());
            assert!(decision.visitor_cookie.is_none(), "{path}");
            assert_eq!(decision.action, Action::Continue, "{path}");
        }
    }

    #[test]
    fn test_cookie_header_parsing() {
        let cookies = RequestCookies::parse(Some("session_id=abc; admin_session=tok; broken"));
        assert_eq!(cookies.get("session_id"), Some("abc"));
        assert_eq!(cookies.get("admin_session"), Some("tok"));
        assert_eq!(cookies.get("missing"), None);
    }
}
