//! Error types for document parsing and model resolution.

use thiserror::Error;

/// Error type for document parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Malformed JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A node has the wrong shape or a required member is missing.
    #[error("invalid document shape at '{path}': {message}")]
    Shape {
        /// JSON path of the offending node.
        path: String,
        /// Error message.
        message: String,
    },

    /// A member holds a value outside its allowed set.
    #[error("invalid value '{value}' for {context}")]
    InvalidValue {
        /// What was being read.
        context: String,
        /// Invalid value.
        value: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for model resolution and naming.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// An identifier that must be canonicalized is empty.
    #[error("empty identifier in {context}")]
    EmptyIdentifier {
        /// Where the identifier came from.
        context: String,
    },

    /// A `subTypes` entry names a model that does not exist.
    #[error("model '{parent}' lists unknown subtype '{subtype}'")]
    UnknownSubtype {
        /// Model declaring the subtype.
        parent: String,
        /// Missing subtype name.
        subtype: String,
    },

    /// A model is listed as a subtype by more than one parent.
    #[error("model '{subtype}' is a subtype of both '{first}' and '{second}'")]
    MultipleParents {
        /// Subtype name.
        subtype: String,
        /// Parent that claimed it first.
        first: String,
        /// Parent that claimed it later.
        second: String,
    },

    /// The subtype graph contains a cycle.
    #[error("cyclic inheritance detected: {path}")]
    CyclicInheritance {
        /// Path of the cycle.
        path: String,
    },
}

impl ParseError {
    /// Creates a shape error.
    pub fn shape(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Shape {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(context: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            context: context.into(),
            value: value.into(),
        }
    }
}

impl SchemaError {
    /// Creates an empty identifier error.
    pub fn empty_identifier(context: impl Into<String>) -> Self {
        Self::EmptyIdentifier {
            context: context.into(),
        }
    }
}
