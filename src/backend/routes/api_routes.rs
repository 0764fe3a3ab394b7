/**
 * API Route Handlers
 *
 * Routes under `/api`. Every route here sits behind the access guard: the
 * handler only runs once a valid bearer token has been verified and the
 * caller's identity attached to the request.
 *
 * # Routes
 *
 * - `GET /api/data`  - JSON list of posts
 * - `POST /api/posts` - create a post as the caller
 * - `GET /api/me`    - the caller's identity
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::get_me;
use crate::backend::middleware::auth_middleware;
use crate::backend::posts::{create_post, get_data};
use crate::backend::server::state::AppState;

/// Configure the protected API routes
///
/// The guard is applied with `route_layer`, so it covers exactly these routes
/// and unmatched paths still fall through to the 404 fallback.
pub fn configure_api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/api/data", get(get_data))
        .route("/api/posts", post(create_post))
        .route("/api/me", get(get_me))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}
