//! Authentication extractors for route handlers.
//!
//! The gatekeeper already redirects unauthenticated requests away from the
//! admin and account areas; these extractors are the in-handler seam that
//! keeps each protected handler honest about what it requires. Both mirror
//! the gatekeeper's presence-based model: a non-empty cookie of the right
//! name is the whole credential.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
    response::{IntoResponse, Redirect, Response},
};

use super::gatekeeper::{
    ADMIN_SESSION_COOKIE, CUSTOMER_AUTH_COOKIE, RequestCookies, login_redirect_target,
};

fn request_cookies(parts: &Parts) -> RequestCookies {
    RequestCookies::parse(
        parts
            .headers
            .get(header::COOKIE)
            .and_then(|h| h.to_str().ok()),
    )
}

/// Extractor that requires an admin session cookie.
///
/// If the cookie is absent or empty, redirects to the admin login page -
/// authentication failures are always navigation, never error pages.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(_admin: RequireAdmin) -> impl IntoResponse {
///     // only reachable with a non-empty admin_session cookie
/// }
/// ```
pub struct RequireAdmin;

/// Rejection for [`RequireAdmin`].
pub struct AdminRejection;

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        Redirect::to("/admin/login").into_response()
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if request_cookies(parts).has_non_empty(ADMIN_SESSION_COOKIE) {
            Ok(Self)
        } else {
            Err(AdminRejection)
        }
    }
}

/// Extractor that requires a customer auth cookie.
///
/// Yields the opaque token value, which downstream code treats as the
/// customer reference for order lookups without interpreting its contents.
pub struct RequireCustomer(pub String);

/// Rejection for [`RequireCustomer`]: redirect to login, preserving the
/// originally requested path and query.
pub struct CustomerRejection(String);

impl IntoResponse for CustomerRejection {
    fn into_response(self) -> Response {
        Redirect::to(&self.0).into_response()
    }
}

impl<S> FromRequestParts<S> for RequireCustomer
where
    S: Send + Sync,
{
    type Rejection = CustomerRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let cookies = request_cookies(parts);
        match cookies.get(CUSTOMER_AUTH_COOKIE) {
            Some(token) if !token.is_empty() => Ok(Self(token.to_owned())),
            _ => Err(CustomerRejection(login_redirect_target(
                parts.uri.path(),
                parts.uri.query(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::FromRequestParts, http::Request};

    async fn extract_customer(uri: &str, cookie: Option<&str>) -> Result<String, String> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = builder.body(()).expect("request");
        let (mut parts, ()) = request.into_parts();
        match RequireCustomer::from_request_parts(&mut parts, &()).await {
            Ok(RequireCustomer(token)) => Ok(token),
            Err(CustomerRejection(location)) => Err(location),
        }
    }

    #[tokio::test]
    async fn test_require_customer_yields_token() {
        let token = extract_customer("/account", Some("customer_auth=cust-9"))
            .await
            .expect("token");
        assert_eq!(token, "cust-9");
    }

    #[tokio::test]
    async fn test_require_customer_redirects_with_next() {
        let location = extract_customer("/account/orders?page=2", None)
            .await
            .expect_err("rejection");
        assert_eq!(location, "/login?next=%2Faccount%2Forders%3Fpage%3D2");
    }

    #[tokio::test]
    async fn test_require_admin_checks_presence() {
        let request = Request::builder()
            .uri("/admin/messages")
            .header(header::COOKIE, "admin_session=tok")
            .body(())
            .expect("request");
        let (mut parts, ()) = request.into_parts();
        assert!(
            RequireAdmin::from_request_parts(&mut parts, &())
                .await
                .is_ok()
        );

        let request = Request::builder()
            .uri("/admin/messages")
            .body(())
            .expect("request");
        let (mut parts, ()) = request.into_parts();
        assert!(
            RequireAdmin::from_request_parts(&mut parts, &())
                .await
                .is_err()
        );
    }
}
