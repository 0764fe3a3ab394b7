//! Backend Error Module
//!
//! Error types for the server-side code and their conversion to HTTP
//! responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and StoreError
//! └── conversion.rs - IntoResponse for BackendError
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, StoreError};
