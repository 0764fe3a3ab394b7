//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Access guard for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use postgate::backend::auth::TokenCodec;
//! use postgate::backend::middleware::{auth_middleware, AuthUser};
//!
//! async fn handler(AuthUser(user): AuthUser) -> String {
//!     user.login
//! }
//!
//! fn protected(codec: TokenCodec) -> Router {
//!     Router::new()
//!         .route("/api/me", get(handler))
//!         .route_layer(middleware::from_fn_with_state(codec, auth_middleware))
//! }
//! ```

pub mod auth;

pub use auth::{auth_middleware, authenticate, bearer_token, AuthUser, AuthenticatedUser};
