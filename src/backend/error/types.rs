/**
 * Backend Error Types
 *
 * This module defines the error types raised by the server-side code.
 * `BackendError` is what handlers and middleware return; it converts to an
 * HTTP response in `conversion`. `StoreError` is raised by the credential
 * and post stores.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Invalid request bodies and similar request-level problems, carrying the
 * status code and the message shown to the client.
 *
 * ## Authentication Errors
 *
 * Every `AuthError` is collapsed to the uniform client-facing status and
 * message defined by `AuthError::status_code` and `AuthError::public_message`.
 *
 * ## Store Errors
 *
 * Persistence failures are logged with full detail and reported to the
 * client as a generic 500.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::error::AuthError;
use crate::shared::SharedError;

/// Failure inside a credential or post store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database rejected or failed the query
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use postgate::backend::error::BackendError;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "invalid body");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., invalid request body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Message returned to the client
        message: String,
    },

    /// Authentication or token failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Credential or post store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Request payload failed validation
    #[error(transparent)]
    Validation(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Auth` - Delegates to `AuthError::status_code`
    /// - `Store` - 500 Internal Server Error
    /// - `Validation` - 400 Bad Request
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Auth(err) => err.status_code(),
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the message shown to the client
    ///
    /// Authentication and store failures never expose their internal cause,
    /// and validation failures do not name the offending field.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Auth(err) => err.public_message().to_string(),
            Self::Store(_) => "internal error".to_string(),
            Self::Validation(_) => "invalid request body".to_string(),
        }
    }
}
