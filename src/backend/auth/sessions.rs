/**
 * Token Codec
 *
 * This module issues and validates the signed bearer tokens handed out at
 * login. Tokens use the compact JWT format (`header.payload.signature`,
 * base64url segments) signed with HS256, so any conformant JWT library can
 * decode them.
 *
 * Validation checks the signature before any claim is trusted. Expiry is
 * strict: a token whose `exp` equals the current second is already rejected,
 * and no leeway is granted.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::auth::error::AuthError;
use crate::backend::server::config::SigningSecret;

/// Claims carried inside a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Database id of the authenticated user
    pub user_id: i64,
    /// Login of the authenticated user
    pub login: String,
    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    /// Build claims issued at `issued_at` and valid for `lifetime`
    ///
    /// Fails with `Internal` if the expiry falls outside the representable
    /// time range.
    pub fn new(
        user_id: i64,
        login: impl Into<String>,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Result<Self, AuthError> {
        let expires_at = issued_at
            .checked_add_signed(lifetime)
            .ok_or_else(|| AuthError::Internal("token expiry out of range".to_string()))?;

        Ok(Self {
            user_id,
            login: login.into(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        })
    }

    /// Strict expiry check: `now >= exp` means expired
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}

/// Encodes and verifies HS256 tokens with the process-wide signing secret
///
/// Cheap to clone; built once at startup and shared by the authenticator and
/// the access guard.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Create a codec from the signing secret
    pub fn new(secret: &SigningSecret) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked by `verify_at` with strict inequality and no leeway.
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.expose().as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.expose().as_bytes()),
            validation,
        }
    }

    /// Sign `claims` into a compact token string
    ///
    /// Deterministic for identical claims and secret.
    pub fn issue(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("failed to sign token: {}", e)))
    }

    /// Verify a token against the current wall-clock time
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verify a token as of `now` (Unix seconds)
    ///
    /// # Errors
    ///
    /// * `BadSignature` - signature or algorithm does not match
    /// * `Malformed` - token cannot be split, decoded or parsed
    /// * `Expired` - `now >= exp`
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, AuthError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(classify)?;

        let claims = token_data.claims;
        if claims.is_expired_at(now) {
            return Err(AuthError::Expired);
        }
        Ok(claims)
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &Algorithm::HS256)
            .finish_non_exhaustive()
    }
}

fn classify(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => AuthError::BadSignature,
        _ => AuthError::Malformed,
    }
}
