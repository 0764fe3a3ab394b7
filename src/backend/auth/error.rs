/**
 * Authentication Errors
 *
 * Internal taxonomy of authentication failures. The variants are kept apart
 * so they can be logged precisely, but clients only ever see two outcomes:
 * "invalid credentials" at login and "unauthorized" at the access guard.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::error::StoreError;

/// Authentication and token failures
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown login or wrong password; the two causes are never separated
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No usable bearer token on a protected request
    #[error("missing bearer token")]
    Unauthenticated,

    /// Token signature does not match the signing secret
    #[error("token signature mismatch")]
    BadSignature,

    /// Token could not be split, decoded or parsed
    #[error("malformed token")]
    Malformed,

    /// Token is at or past its expiry time
    #[error("token expired")]
    Expired,

    /// Credential store lookup failed
    #[error("credential store failure: {0}")]
    Store(#[from] StoreError),

    /// Signing or worker failure inside the service
    #[error("internal authentication failure: {0}")]
    Internal(String),
}

impl AuthError {
    /// HTTP status reported to the client
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials
            | Self::Unauthenticated
            | Self::BadSignature
            | Self::Malformed
            | Self::Expired => StatusCode::UNAUTHORIZED,
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message reported to the client
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid credentials",
            Self::Unauthenticated | Self::BadSignature | Self::Malformed | Self::Expired => {
                "unauthorized"
            }
            Self::Store(_) | Self::Internal(_) => "internal error",
        }
    }
}
