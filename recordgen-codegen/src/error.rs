//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Source parsing error.
    #[error("source parse error: {0}")]
    Parse(#[from] recordgen_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid generator configuration, returned by
    /// [`GeneratorBuilder::build`](crate::GeneratorBuilder::build) for an
    /// empty or whitespace-containing warning id or a non-blank indent.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}
