//! Error types for both codecs.
//!
//! Propagation policy: unknown data in child position degrades to an
//! opaque value; malformed data for a recognized shape, and violated
//! preconditions, always surface.

use parcelkit_model::ModelError;
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors raised by the JSON and SOAP codecs.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Serialization attempted with no active service context.
    #[error("no service context set on `{0}`; call set_service first")]
    ServiceNotSet(&'static str),

    /// A short name resolved against no known namespace while the
    /// payload shape demanded a structured result.
    #[error("no entity type registered for short name `{0}`")]
    EntityNotFound(String),

    /// Structurally malformed input for a recognized shape.
    #[error("deserialization failed: {message}")]
    Deserialization {
        message: String,
        #[source]
        source: Option<Box<CodecError>>,
    },

    /// A wire shape the heuristics refuse to guess about.
    #[error("unsupported wire shape: {0}")]
    NotSupported(String),

    /// A value failed a format constraint (e.g. malformed date string).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl CodecError {
    pub(crate) fn deserialization(message: impl Into<String>) -> Self {
        CodecError::Deserialization {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn deserialization_caused_by(message: impl Into<String>, cause: CodecError) -> Self {
        CodecError::Deserialization {
            message: message.into(),
            source: Some(Box::new(cause)),
        }
    }
}
