//! Postgate - Main Library
//!
//! Postgate is a small HTTP API backed by PostgreSQL. Users log in with a
//! login/password pair, receive a signed, time-limited bearer token, and use
//! that token to read and create posts.
//!
//! # Overview
//!
//! This library provides:
//! - Password verification against salted bcrypt hashes
//! - HS256 token issuance and validation (compact JWT format)
//! - An access guard middleware that turns a bearer token into a typed,
//!   per-request authenticated identity
//! - Post listing (JSON and escaped HTML) and post creation
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared by every layer
//!   - Post and new-post payloads
//!   - Shared validation error type
//!
//! - **`backend`** - Server-side code
//!   - Axum router, access guard middleware and handlers
//!   - Authenticator, token codec, password verifier
//!   - Credential and post stores (PostgreSQL and in-memory)
//!   - Configuration, migrations and demo seeding
//!
//! # Usage
//!
//! ```rust,no_run
//! use postgate::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The signing secret and token lifetime are fixed at startup and shared
//! read-only across requests. Every request validates its token on its own;
//! nothing about a session is stored server-side.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
