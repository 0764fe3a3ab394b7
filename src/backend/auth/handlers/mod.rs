//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── login.rs    - POST /auth/login
//! └── me.rs       - GET /api/me (behind the access guard)
//! ```

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{LoginRequest, LoginResponse, MeResponse};

// Re-export handlers
pub use login::login;
pub use me::get_me;
