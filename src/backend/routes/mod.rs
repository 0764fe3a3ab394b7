//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, public routes, fallback
//! └── api_routes.rs   - Guarded `/api` routes
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use postgate::backend::auth::MemoryCredentialStore;
//! use postgate::backend::posts::MemoryPostStore;
//! use postgate::backend::routes::create_router;
//! use postgate::backend::server::{build_state, ServerConfig};
//!
//! let config = ServerConfig::from_lookup(|name| {
//!     (name == "JWT_SECRET").then(|| "dev-secret".to_string())
//! })
//! .unwrap();
//! let state = build_state(
//!     &config,
//!     Arc::new(MemoryCredentialStore::new()),
//!     Arc::new(MemoryPostStore::new()),
//! );
//! let router = create_router(state);
//! ```

/// Main router creation
pub mod router;

/// Guarded API routes
pub mod api_routes;

pub use router::create_router;
