//! Error types for the entity model.

use thiserror::Error;

/// Errors raised by the entity contract itself (property assignment).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A value failed a format constraint during property assignment.
    #[error("invalid value for property `{property}`: {message}")]
    InvalidArgument { property: String, message: String },
}

impl ModelError {
    /// Shorthand for the common construction pattern in setters.
    pub fn invalid(property: impl Into<String>, message: impl Into<String>) -> Self {
        ModelError::InvalidArgument {
            property: property.into(),
            message: message.into(),
        }
    }
}
