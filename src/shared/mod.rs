//! Shared Module
//!
//! Types shared by every layer of the service. They carry no HTTP or
//! authentication logic and are serialized as-is in API responses.

/// Post data structures
pub mod post;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use post::{NewPost, Post};
