//! Server Module
//!
//! This module contains the server-side code for configuring and starting
//! the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`config`** - Environment configuration, signing secret, database pool
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`seed`** - Demo account and starter posts
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Configuration loading
//! ├── state.rs        - AppState and FromRef implementations
//! ├── seed.rs         - Demo data seeding
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Database**: connect and migrate
//! 3. **Seeding**: demo user and posts
//! 4. **Router Creation**: public routes plus guarded `/api` routes

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Demo data seeding
pub mod seed;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig, SigningSecret};
pub use init::{build_state, create_app, StartupError};
pub use state::AppState;
