//! Backend Module
//!
//! This module contains all server-side code for postgate: an Axum HTTP
//! server that exchanges login/password for a signed token and guards the
//! post API with it.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, seeding, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password verification, token codec, authenticator, login
//! - **`middleware`** - Access guard for protected routes
//! - **`posts`** - Post stores, handlers and HTML rendering
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Access guard
//! ├── posts/          - Posts
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! 1. `POST /auth/login` runs the authenticator and returns a token
//! 2. Requests to `/api/*` pass through `auth_middleware`, which verifies the
//!    bearer token and attaches an `AuthenticatedUser`
//! 3. Handlers read that identity with the `AuthUser` extractor
//!
//! No session state is kept on the server; a token is valid until it expires.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Posts
pub mod posts;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::create_app;
