/**
 * Authentication Middleware
 *
 * The access guard for protected routes. It extracts the bearer token from
 * the Authorization header, verifies it with the token codec, and binds the
 * caller's identity to the request as a typed `AuthenticatedUser`.
 *
 * Every rejection (missing header, wrong scheme, bad signature, malformed
 * or expired token) produces the same 401 response; the specific cause is
 * only logged.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::error::AuthError;
use crate::backend::auth::sessions::TokenCodec;
use crate::backend::error::BackendError;

/// Authenticated user data extracted from a verified token
///
/// Lives in the request extensions for the rest of the request and is
/// dropped with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub login: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies it (signature first, then expiry)
/// 3. Attaches `AuthenticatedUser` to the request extensions
///
/// Returns 401 Unauthorized if the token is missing or invalid; the
/// protected handler is never reached in that case.
pub async fn auth_middleware(
    State(codec): State<TokenCodec>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = authenticate(&codec, request.headers()).map_err(|e| {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "Rejected request: {}",
            e
        );
        BackendError::from(AuthError::Unauthenticated)
    })?;

    tracing::debug!("Authenticated request for {}", user.login);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Verify the bearer token in `headers` and return the caller's identity
pub fn authenticate(codec: &TokenCodec, headers: &HeaderMap) -> Result<AuthenticatedUser, AuthError> {
    let token = bearer_token(headers).ok_or(AuthError::Unauthenticated)?;
    let claims = codec.verify(token)?;

    Ok(AuthenticatedUser {
        user_id: claims.user_id,
        login: claims.login,
    })
}

/// Extract the token from `Authorization: Bearer <token>`
///
/// The scheme is matched case-insensitively. A missing header, another
/// scheme, or an empty token all yield `None`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Axum extractor for the authenticated user
///
/// Use it as a handler parameter on routes behind `auth_middleware`. If the
/// middleware did not run, extraction fails with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::from(AuthError::Unauthenticated)
            })?;

        Ok(AuthUser(user))
    }
}
