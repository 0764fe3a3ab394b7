/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits used for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds everything a request may need, built once at startup:
 * - The authenticator (credential store + token codec + lifetime)
 * - The token codec used by the access guard
 * - The post store
 *
 * Nothing in the state is mutated per request; the stores do their own
 * synchronization.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers and middleware extract only the
 * part they use, e.g. `State<TokenCodec>` in the access guard.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::{Authenticator, TokenCodec};
use crate::backend::posts::PostStore;

/// Central state container shared by all routes
#[derive(Clone)]
pub struct AppState {
    /// Login orchestration
    pub authenticator: Authenticator,
    /// Token verification for the access guard
    pub codec: TokenCodec,
    /// Post persistence
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(authenticator: Authenticator, codec: TokenCodec, posts: Arc<dyn PostStore>) -> Self {
        Self {
            authenticator,
            codec,
            posts,
        }
    }
}

impl FromRef<AppState> for Authenticator {
    fn from_ref(state: &AppState) -> Self {
        state.authenticator.clone()
    }
}

impl FromRef<AppState> for TokenCodec {
    fn from_ref(state: &AppState) -> Self {
        state.codec.clone()
    }
}

impl FromRef<AppState> for Arc<dyn PostStore> {
    fn from_ref(state: &AppState) -> Self {
        state.posts.clone()
    }
}
