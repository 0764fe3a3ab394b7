/**
 * Credential Store
 *
 * This module defines the credential record used at login and the stores
 * it is read from. The authentication core only ever reads credentials;
 * accounts are provisioned elsewhere (see `server::seed`).
 */

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::backend::error::StoreError;

/// A user's login credentials as stored in the `users` table
#[derive(Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CredentialRecord {
    /// Unique user ID
    pub id: i64,
    /// Unique login
    pub login: String,
    /// bcrypt hash (salt and cost embedded)
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

impl std::fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("id", &self.id)
            .field("login", &self.login)
            .finish_non_exhaustive()
    }
}

/// Read-only lookup of credential records by login
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find the record for `login`, or `None` if no such user exists
    async fn find_by_login(&self, login: &str) -> Result<Option<CredentialRecord>, StoreError>;
}

/// Credential store backed by the PostgreSQL `users` table
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_login(&self, login: &str) -> Result<Option<CredentialRecord>, StoreError> {
        let record = sqlx::query_as::<_, CredentialRecord>(
            r#"
            SELECT id, login, password
            FROM users
            WHERE login = $1
            "#,
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}

/// In-memory credential store
///
/// Keyed by login, so logins stay unique. Used by tests and local tooling.
#[derive(Clone, Default)]
pub struct MemoryCredentialStore {
    records: Arc<RwLock<HashMap<String, CredentialRecord>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing records; a later duplicate login replaces an earlier one
    pub fn with_records(records: impl IntoIterator<Item = CredentialRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.login.clone(), record))
            .collect();
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_login(&self, login: &str) -> Result<Option<CredentialRecord>, StoreError> {
        Ok(self.records.read().await.get(login).cloned())
    }
}
