//! Shared Error Types
//!
//! Validation failures raised by the wire types in `shared`. The HTTP layer
//! decides how they are reported.
//!
//! ```rust
//! use postgate::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "must not be empty");
//! assert_eq!(error.to_string(), "invalid field 'title': must not be empty");
//! ```
use thiserror::Error;

/// A payload failed validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A single field is missing a required value or holds a bad one
    #[error("invalid field '{field}': {message}")]
    ValidationError { field: String, message: String },
}

impl SharedError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}
