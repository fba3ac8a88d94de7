//! Admin credential store.
//!
//! Authentication for the back office is a shared-secret password check plus
//! an opaque token in a cookie. There is no server-side session record:
//! possession of a non-empty `admin_session` cookie is treated as proof of
//! authentication. That is a deliberate reproduction of the system this
//! replaces; a hardened variant would store or sign the token and support
//! revocation.

use cookie::{Cookie, SameSite, time::Duration};
use secrecy::{ExposeSecret, SecretString};
use uuid::Uuid;

use crate::middleware::gatekeeper::{ADMIN_SESSION_COOKIE, RequestCookies};

/// Admin session cookie lifetime.
const ADMIN_SESSION_TTL_DAYS: i64 = 7;

/// Credential store for the admin back office.
///
/// Constructed with the configured admin password; nothing reads the secret
/// from ambient state.
pub struct AuthService {
    admin_password: SecretString,
    secure_cookies: bool,
}

impl AuthService {
    /// Create the credential store.
    #[must_use]
    pub const fn new(admin_password: SecretString, secure_cookies: bool) -> Self {
        Self {
            admin_password,
            secure_cookies,
        }
    }

    /// Check a candidate password against the shared secret.
    ///
    /// Comparison is constant-time in the candidate length to avoid leaking
    /// the match position through timing.
    #[must_use]
    pub fn verify_password(&self, candidate: &str) -> bool {
        constant_time_eq(
            candidate.as_bytes(),
            self.admin_password.expose_secret().as_bytes(),
        )
    }

    /// Mint a new admin session: a fresh opaque token wrapped in a cookie
    /// directive for the caller to attach to the response.
    #[must_use]
    pub fn create_session(&self) -> Cookie<'static> {
        let token = Uuid::new_v4().simple().to_string();
        let mut cookie = Cookie::new(ADMIN_SESSION_COOKIE, token);
        cookie.set_http_only(true);
        cookie.set_same_site(SameSite::Lax);
        cookie.set_path("/");
        cookie.set_max_age(Duration::days(ADMIN_SESSION_TTL_DAYS));
        cookie.set_secure(self.secure_cookies);
        cookie
    }

    /// Produce the cookie directive that clears the admin session.
    #[must_use]
    pub fn destroy_session(&self) -> Cookie<'static> {
        let mut cookie = Cookie::new(ADMIN_SESSION_COOKIE, "");
        cookie.set_http_only(true);
        cookie.set_same_site(SameSite::Lax);
        cookie.set_path("/");
        cookie.set_max_age(Duration::ZERO);
        cookie.set_secure(self.secure_cookies);
        cookie
    }

    /// Whether the request carries an admin session.
    #[must_use]
    pub fn has_session(cookies: &RequestCookies) -> bool {
        cookies.has_non_empty(ADMIN_SESSION_COOKIE)
    }
}

/// Constant-time byte comparison. Length mismatch returns early - the secret
/// length is not considered sensitive here.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
