//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Document parsing error.
    #[error("document parse error: {0}")]
    Parse(#[from] swagbuild_schema::ParseError),

    /// Model resolution or naming error.
    #[error("schema error: {0}")]
    Schema(#[from] swagbuild_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A name does not form a valid Go identifier.
    #[error("invalid Go identifier '{value}' for {context}")]
    InvalidIdentifier {
        /// What the name was for.
        context: String,
        /// Offending name after canonicalization.
        value: String,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates an invalid identifier error.
    pub fn invalid_identifier(context: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            context: context.into(),
            value: value.into(),
        }
    }

    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_identifier_display() {
        let err = CodegenError::invalid_identifier("API base name", "Device-states");
        assert_eq!(
            err.to_string(),
            "invalid Go identifier 'Device-states' for API base name"
        );
    }
}
