/**
 * Server Initialization
 *
 * This module wires configuration, stores and routes into a ready-to-serve
 * Axum application.
 *
 * # Initialization Process
 *
 * 1. Connect to PostgreSQL and apply migrations
 * 2. Seed the demo account and starter posts
 * 3. Build the token codec and authenticator from the configuration
 * 4. Assemble `AppState` and the router
 *
 * Any failure aborts startup; a server without its database or secret
 * cannot answer a single request correctly.
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::{Authenticator, CredentialStore, PgCredentialStore, TokenCodec};
use crate::backend::posts::{PgPostStore, PostStore};
use crate::backend::routes::create_router;
use crate::backend::server::config::{connect_database, ConfigError, ServerConfig};
use crate::backend::server::seed::{seed_demo_data, SeedError};
use crate::backend::server::state::AppState;

/// Errors that stop the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("seeding failed: {0}")]
    Seed(#[from] SeedError),
}

/// Create and configure the Axum application backed by PostgreSQL
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing postgate backend server");

    let pool = connect_database(&config.database_url).await?;
    seed_demo_data(&pool).await?;

    let state = build_state(
        config,
        Arc::new(PgCredentialStore::new(pool.clone())),
        Arc::new(PgPostStore::new(pool)),
    );

    tracing::info!(
        "Router configured (token lifetime {}s)",
        config.token_lifetime.as_secs()
    );

    Ok(create_router(state))
}

/// Build the application state over arbitrary stores
///
/// Used by `create_app` with the PostgreSQL stores and by tests with the
/// in-memory ones.
pub fn build_state(
    config: &ServerConfig,
    credentials: Arc<dyn CredentialStore>,
    posts: Arc<dyn PostStore>,
) -> AppState {
    let codec = TokenCodec::new(&config.signing_secret);
    let authenticator = Authenticator::new(credentials, codec.clone(), config.token_lifetime);
    AppState::new(authenticator, codec, posts)
}
