/**
 * Authenticator
 *
 * Orchestrates login: look up the credential record, verify the password,
 * and issue a token. An unknown login and a wrong password fail with the
 * same `InvalidCredentials` error, and both paths run one bcrypt
 * verification so they also take the same time.
 */

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::backend::auth::error::AuthError;
use crate::backend::auth::password::{hash_password, verify_password};
use crate::backend::auth::sessions::{Claims, TokenCodec};
use crate::backend::auth::users::CredentialStore;

/// Token returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Signed token string
    pub token: String,
    /// Remaining lifetime in seconds
    pub expires_in: u64,
}

/// Login orchestration over a credential store and a token codec
#[derive(Clone)]
pub struct Authenticator {
    store: Arc<dyn CredentialStore>,
    codec: TokenCodec,
    token_lifetime: Duration,
}

impl Authenticator {
    pub fn new(store: Arc<dyn CredentialStore>, codec: TokenCodec, token_lifetime: Duration) -> Self {
        Self {
            store,
            codec,
            token_lifetime,
        }
    }

    /// Configured token lifetime
    pub fn token_lifetime(&self) -> Duration {
        self.token_lifetime
    }

    /// Verify `login`/`password` and issue a token valid from now
    pub async fn login(&self, login: &str, password: &str) -> Result<IssuedToken, AuthError> {
        self.login_at(login, password, Utc::now()).await
    }

    /// Verify `login`/`password` and issue a token valid from `now`
    pub async fn login_at(
        &self,
        login: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError> {
        let record = self.store.find_by_login(login).await?;

        let stored_hash = record.as_ref().map(|record| record.password_hash.clone());
        let password_ok = verify_blocking(password.to_owned(), stored_hash).await?;

        let record = match record {
            Some(record) if password_ok => record,
            Some(_) => {
                tracing::warn!("Login rejected for {}: wrong password", login);
                return Err(AuthError::InvalidCredentials);
            }
            None => {
                tracing::warn!("Login rejected for {}: unknown login", login);
                return Err(AuthError::InvalidCredentials);
            }
        };

        let lifetime = chrono::Duration::from_std(self.token_lifetime)
            .map_err(|e| AuthError::Internal(format!("token lifetime out of range: {}", e)))?;
        let claims = Claims::new(record.id, record.login.clone(), now, lifetime)?;
        let token = self.codec.issue(&claims)?;

        tracing::info!("User logged in successfully: {} ({})", record.login, record.id);

        Ok(IssuedToken {
            token,
            expires_in: self.token_lifetime.as_secs(),
        })
    }
}

/// Run bcrypt on the blocking pool so async workers keep serving requests.
///
/// Without a stored hash the password is checked against the dummy hash,
/// which is also built on the blocking pool the first time it is needed.
async fn verify_blocking(password: String, stored_hash: Option<String>) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || {
        let stored_hash = stored_hash.as_deref().unwrap_or_else(|| dummy_hash());
        verify_password(&password, stored_hash)
    })
    .await
    .map_err(|e| AuthError::Internal(format!("password verification task failed: {}", e)))
}

/// Hash compared against when the login is unknown.
fn dummy_hash() -> &'static str {
    static DUMMY_HASH: OnceLock<String> = OnceLock::new();
    DUMMY_HASH.get_or_init(|| {
        hash_password("postgate-unknown-login").unwrap_or_else(|e| {
            tracing::error!("Failed to prepare dummy password hash: {:?}", e);
            String::new()
        })
    })
}
