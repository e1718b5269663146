//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] modelgen_schema::ParseError),

    /// Schema lookup or validation error.
    #[error("schema error: {0}")]
    Schema(#[from] modelgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A type descriptor has no mapping rule in this position.
    #[error("unsupported {kind} type '{name}'")]
    UnsupportedType {
        /// Descriptor kind (scalar, list, list-relation, ...).
        kind: String,
        /// Offending name or position.
        name: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates an unsupported type error.
    pub fn unsupported(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}
