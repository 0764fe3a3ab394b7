/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Routes
 *
 * Public:
 * - `POST /auth/login` - exchange login/password for a token
 * - `GET /posts`       - HTML listing
 *
 * Guarded (see `api_routes`):
 * - `GET /api/data`, `POST /api/posts`, `GET /api/me`
 *
 * Anything else falls through to a JSON 404.
 */

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::auth::login;
use crate::backend::error::BackendError;
use crate::backend::posts::show_posts;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Authenticator, token codec and post store
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let public = Router::new()
        .route("/auth/login", post(login))
        .route("/posts", get(show_posts));

    public
        .merge(configure_api_routes(&app_state))
        .fallback(not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "not found")
}
