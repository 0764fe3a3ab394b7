/**
 * Authentication Handler Types
 *
 * Request and response bodies for the login and identity endpoints.
 */

use serde::{Deserialize, Serialize};

/// Login request
///
/// Contains the login and password for user authentication.
#[derive(Deserialize, Serialize)]
pub struct LoginRequest {
    /// User's login
    pub login: String,
    /// User's password (verified against the stored hash, never logged)
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("login", &self.login)
            .finish_non_exhaustive()
    }
}

/// Login response
///
/// Returned by the login handler on success.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    /// Signed bearer token
    pub token: String,
    /// Seconds until the token expires
    pub expires_in: u64,
}

/// Identity of the caller, as established by the access guard
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MeResponse {
    pub user_id: i64,
    pub login: String,
}
