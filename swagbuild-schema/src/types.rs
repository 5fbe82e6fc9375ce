//! Document and model definitions.
//!
//! This module contains the data structures a schema document is decoded into
//! before any resolution runs. Maps keep document order.

use crate::operations::ApiDef;
use indexmap::IndexMap;
use serde::Deserialize;

/// Complete schema document (one API surface).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Swagger version string.
    #[serde(default)]
    pub swagger_version: Option<String>,
    /// API version.
    #[serde(default)]
    pub api_version: String,
    /// Base path for all operations.
    #[serde(default)]
    pub base_path: String,
    /// Resource path of this document.
    #[serde(default)]
    pub resource_path: Option<String>,
    /// API paths with their operations.
    #[serde(default)]
    pub apis: Vec<ApiDef>,
    /// Model definitions keyed by model name.
    #[serde(default)]
    pub models: IndexMap<String, ModelDef>,
}

impl Document {
    /// Returns the number of operations across all API paths.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.apis.iter().map(|api| api.operations.len()).sum()
    }
}

/// Model definition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDef {
    /// Model id (usually equal to the map key).
    #[serde(default)]
    pub id: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Properties keyed by wire name.
    #[serde(default)]
    pub properties: IndexMap<String, PropertyDef>,
    /// Names of models inheriting from this one.
    #[serde(default)]
    pub sub_types: Vec<String>,
}

/// Model property definition.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyDef {
    /// Declared schema type (e.g. `string`, `long`, `List[Channel]`).
    #[serde(rename = "type")]
    pub data_type: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
}

impl PropertyDef {
    /// Creates a property of the given schema type.
    #[must_use]
    pub fn new(data_type: impl Into<String>) -> Self {
        Self {
            data_type: data_type.into(),
            description: None,
        }
    }
}
