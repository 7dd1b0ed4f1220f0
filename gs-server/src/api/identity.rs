//! Caller identity resolution.
//!
//! Pure result-returning verification: the handler owns all response
//! writing, so a failed check can never race a second response.

use crate::{ApiError, ApiResult, AppState};

use gs_auth::{Identity, SESSION_COOKIE};

use std::panic::Location;

use axum::http::{HeaderMap, header};
use axum_extra::extract::cookie::CookieJar;
use error_location::ErrorLocation;

/// Resolve the caller identity from the request headers.
///
/// An `Authorization: Bearer <token>` header takes priority; the
/// `__session` cookie is the fallback for browser callers. Missing or
/// unverifiable credentials both come back as `Unauthorized`.
#[track_caller]
pub fn verify(state: &AppState, headers: &HeaderMap) -> ApiResult<Identity> {
    let token = bearer_or_session(headers).ok_or_else(|| ApiError::Unauthorized {
        message: "no bearer token or session cookie".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(state.jwt_validator.verify(&token)?)
}

/// Extract the credential: bearer header first, then session cookie.
fn bearer_or_session(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(header::AUTHORIZATION)
        && let Ok(value) = value.to_str()
        && let Some(token) = value.strip_prefix("Bearer ")
    {
        return Some(token.to_string());
    }

    CookieJar::from_headers(headers)
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

#[cfg(test)]
mod tests {
    use super::bearer_or_session;

    use axum::http::{HeaderMap, HeaderValue, header};

    #[test]
    fn given_bearer_header_then_token_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc123"),
        );

        assert_eq!(bearer_or_session(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn given_session_cookie_then_token_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("other=1; __session=abc123"),
        );

        assert_eq!(bearer_or_session(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn given_both_then_bearer_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer from-header"),
        );
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("__session=from-cookie"),
        );

        assert_eq!(bearer_or_session(&headers).as_deref(), Some("from-header"));
    }

    #[test]
    fn given_non_bearer_authorization_then_falls_back_to_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwdw=="),
        );
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("__session=abc123"),
        );

        assert_eq!(bearer_or_session(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn given_no_credential_then_none() {
        let headers = HeaderMap::new();

        assert_eq!(bearer_or_session(&headers), None);
    }
}
