//! API and operation definitions.
//!
//! This module contains the data structures for API paths, their operations,
//! operation parameters and declared error responses. The generator reads
//! these but never mutates them.

use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Response class sentinel for operations without a body.
pub const VOID_RESPONSE: &str = "void";

/// One API path and the operations available on it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiDef {
    /// Path template with `{name}` placeholders.
    pub path: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Operations on this path.
    #[serde(default)]
    pub operations: Vec<OperationDef>,
}

/// Operation definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDef {
    /// HTTP method (e.g. `GET`).
    pub http_method: String,
    /// Operation nickname, used to name the client function.
    pub nickname: String,
    /// Short summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Longer notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Response type, or `void`.
    #[serde(default = "default_response_class")]
    pub response_class: String,
    /// Parameters in declaration order.
    #[serde(default)]
    pub parameters: Vec<ParameterDef>,
    /// Declared error responses in declaration order.
    #[serde(default)]
    pub error_responses: Vec<ErrorResponse>,
}

fn default_response_class() -> String {
    VOID_RESPONSE.to_string()
}

impl OperationDef {
    /// Creates an operation without parameters or error responses.
    #[must_use]
    pub fn new(http_method: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            http_method: http_method.into(),
            nickname: nickname.into(),
            summary: None,
            notes: None,
            response_class: default_response_class(),
            parameters: Vec::new(),
            error_responses: Vec::new(),
        }
    }

    /// Adds a parameter to the operation.
    pub fn add_parameter(&mut self, parameter: ParameterDef) {
        self.parameters.push(parameter);
    }

    /// Adds an error response to the operation.
    pub fn add_error_response(&mut self, code: u16, reason: impl Into<String>) {
        self.error_responses.push(ErrorResponse {
            code,
            reason: reason.into(),
        });
    }

    /// Returns true if the operation returns a body.
    #[must_use]
    pub fn has_response(&self) -> bool {
        self.response_class != VOID_RESPONSE
    }
}

/// Where a parameter travels in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamLocation {
    /// Substituted into the path template.
    Path,
    /// Sent as a query/body key.
    Query,
    /// Sent in the request body.
    Body,
}

impl ParamLocation {
    /// Parses a parameter location from its schema name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "path" => Some(Self::Path),
            "query" => Some(Self::Query),
            "body" => Some(Self::Body),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for ParamLocation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).ok_or_else(|| {
            de::Error::custom(format!(
                "unknown paramType '{raw}', expected path, query or body"
            ))
        })
    }
}

/// Parameter definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDef {
    /// Wire name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Location of the parameter.
    pub param_type: ParamLocation,
    /// Whether the caller must supply it.
    #[serde(default)]
    pub required: bool,
    /// Whether several values may be given.
    #[serde(default)]
    pub allow_multiple: bool,
    /// Declared schema type.
    pub data_type: String,
}

impl ParameterDef {
    /// Creates a parameter definition.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        param_type: ParamLocation,
        required: bool,
        data_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            param_type,
            required,
            allow_multiple: false,
            data_type: data_type.into(),
        }
    }

    /// Returns true if the parameter is part of the call signature.
    ///
    /// Path parameters are always positional since a path template cannot
    /// omit a placeholder.
    #[must_use]
    pub fn is_positional(&self) -> bool {
        self.required || self.param_type == ParamLocation::Path
    }
}

/// Declared error response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status code.
    pub code: u16,
    /// Reason reported for that code.
    pub reason: String,
}
