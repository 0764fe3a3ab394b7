//! Authentication Module
//!
//! Credential verification, token issuance, and the login endpoint.
//!
//! # Architecture
//!
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - Token codec (HS256, compact JWT format) and claims
//! - **`users`** - Credential records and the stores they are read from
//! - **`authenticator`** - Login orchestration
//! - **`error`** - Authentication error taxonomy
//! - **`handlers`** - HTTP handlers
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs            - Module exports and documentation
//! ├── password.rs       - Password verifier
//! ├── sessions.rs       - Token codec
//! ├── users.rs          - Credential store
//! ├── authenticator.rs  - Authenticator
//! ├── error.rs          - AuthError
//! └── handlers/         - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: login + password → credentials verified → token returned
//! 2. **Protected request**: bearer token → access guard verifies it →
//!    identity bound to the request (see `backend::middleware`)
//!
//! # Security
//!
//! - Unknown login and wrong password are reported identically
//! - Token validation failures are reported identically
//! - Tokens are never stored server-side; they expire after the configured
//!   lifetime (6 hours by default) and cannot be revoked

/// Password hashing and verification
pub mod password;

/// Token codec
pub mod sessions;

/// Credential records and stores
pub mod users;

/// Login orchestration
pub mod authenticator;

/// Authentication errors
pub mod error;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use authenticator::{Authenticator, IssuedToken};
pub use error::AuthError;
pub use handlers::{get_me, login, LoginRequest, LoginResponse, MeResponse};
pub use sessions::{Claims, TokenCodec};
pub use users::{CredentialRecord, CredentialStore, MemoryCredentialStore, PgCredentialStore};
