/**
 * Login Handler
 *
 * This module implements the handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Parse the JSON body (`400 invalid body` if it is not a login request)
 * 2. Delegate to the `Authenticator`
 * 3. Return the token and its lifetime in seconds
 *
 * # Security
 *
 * - Unknown login and wrong password return the same 401 body
 * - Passwords are never logged or returned in responses
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::authenticator::Authenticator;
use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::error::BackendError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - body is not JSON or lacks `login`/`password`
/// * `401 Unauthorized` - `{"error":"invalid credentials"}` for any bad login
/// * `500 Internal Server Error` - credential store or signing failure
///
/// # Example Request
///
/// ```http
/// POST /auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {"login": "alice", "password": "password123"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...", "expires_in": 21600}
/// ```
pub async fn login(
    State(authenticator): State<Authenticator>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, BackendError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected login body: {}", e.body_text());
        BackendError::handler(StatusCode::BAD_REQUEST, "invalid body")
    })?;

    tracing::info!("Login request for: {}", request.login);

    let issued = authenticator.login(&request.login, &request.password).await?;

    Ok(Json(LoginResponse {
        token: issued.token,
        expires_in: issued.expires_in,
    }))
}
