//! Intermediate representation for code generation.
//!
//! This module provides the resolved, inheritance-free representation of a
//! document together with the naming and type-mapping rules shared by the
//! resolver and the generators.

use crate::error::SchemaError;
use crate::operations::ApiDef;
use crate::resolver::{InheritancePolicy, ModelResolver};
use crate::types::Document;
use indexmap::{IndexMap, IndexSet};

/// Prefix of a schema list type.
const LIST_PREFIX: &str = "List[";

/// Intermediate representation of one schema document.
#[derive(Debug, Clone)]
pub struct SchemaIr {
    /// API base name (the document's file stem).
    pub api_base: String,
    /// API version.
    pub api_version: String,
    /// Base path for all operations.
    pub base_path: String,
    /// Resolved model types in document order.
    pub types: IndexMap<String, TypeRecord>,
    /// API paths with their operations.
    pub apis: Vec<ApiDef>,
}

impl SchemaIr {
    /// Creates an intermediate representation from a parsed document.
    ///
    /// # Errors
    /// Returns `SchemaError` if the model graph cannot be resolved.
    pub fn from_document(
        api_base: impl Into<String>,
        document: Document,
        policy: InheritancePolicy,
    ) -> Result<Self, SchemaError> {
        let types = ModelResolver::new(policy).resolve(&document.models)?;

        Ok(Self {
            api_base: api_base.into(),
            api_version: document.api_version,
            base_path: document.base_path,
            types,
            apis: document.apis,
        })
    }

    /// Gets a resolved type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeRecord> {
        self.types.get(name)
    }

    /// Returns the number of operations across all API paths.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.apis.iter().map(|api| api.operations.len()).sum()
    }
}

/// Model type record.
///
/// While resolution is running a record may point at its parent; records
/// handed out by the resolver never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRecord {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Fields, inherited ones first once resolved.
    pub fields: Vec<FieldRecord>,
    /// Names of types inheriting from this one.
    pub subtypes: IndexSet<String>,
    /// Type this one inherits from, while unresolved.
    pub parent: Option<String>,
}

impl TypeRecord {
    /// Creates an empty type record.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
            subtypes: IndexSet::new(),
            parent: None,
        }
    }

    /// Returns true if the record still waits on a parent.
    #[must_use]
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns true if a field with the given wire name exists.
    #[must_use]
    pub fn has_wire_name(&self, wire_name: &str) -> bool {
        self.fields.iter().any(|f| f.wire_name == wire_name)
    }
}

/// Field of a model type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    /// Canonicalized identifier.
    pub exported_name: String,
    /// Property key as written in the schema.
    pub wire_name: String,
    /// Target type name.
    pub type_name: String,
}

impl FieldRecord {
    /// Creates a field from a schema property.
    ///
    /// # Errors
    /// Returns `SchemaError::EmptyIdentifier` if the property key is empty.
    pub fn from_property(wire_name: &str, data_type: &str) -> Result<Self, SchemaError> {
        Ok(Self {
            exported_name: canonicalize(wire_name)
                .map_err(|_| SchemaError::empty_identifier("model property name"))?,
            wire_name: wire_name.to_string(),
            type_name: convert_type(data_type),
        })
    }
}

/// Converts a schema type name to a target type name.
///
/// `List[X]` becomes `[]X` with `X` mapped once by the scalar rules; the
/// inner name is not unwrapped again.
#[must_use]
pub fn convert_type(schema_type: &str) -> String {
    match schema_type.strip_prefix(LIST_PREFIX) {
        Some(inner) => {
            let inner = inner.strip_suffix(']').unwrap_or(inner);
            format!("[]{}", convert_scalar(inner))
        }
        None => convert_scalar(schema_type).to_string(),
    }
}

fn convert_scalar(schema_type: &str) -> &str {
    match schema_type {
        "object" | "Date" => "string",
        "long" => "uint64",
        "double" => "float64",
        "boolean" => "bool",
        other => other,
    }
}

/// Converts a schema identifier to an exported identifier.
///
/// The first character and every character following an underscore are
/// uppercased (underscores are kept), and every `Id` becomes `ID`.
///
/// # Errors
/// Returns `SchemaError::EmptyIdentifier` for an empty identifier.
pub fn canonicalize(identifier: &str) -> Result<String, SchemaError> {
    let mut chars = identifier.chars();
    let first = chars
        .next()
        .ok_or_else(|| SchemaError::empty_identifier("identifier"))?;

    let mut cased: Vec<char> = first.to_uppercase().collect();
    let mut prev = first;
    for c in chars {
        if prev == '_' {
            cased.extend(c.to_uppercase());
        } else {
            cased.push(c);
        }
        prev = c;
    }

    for i in 1..cased.len() {
        if cased[i - 1] == 'I' && cased[i] == 'd' {
            cased[i] = 'D';
        }
    }

    Ok(cased.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    #[test]
    fn test_convert_type_scalars() {
        assert_eq!(convert_type("object"), "string");
        assert_eq!(convert_type("long"), "uint64");
        assert_eq!(convert_type("double"), "float64");
        assert_eq!(convert_type("Date"), "string");
        assert_eq!(convert_type("boolean"), "bool");
        assert_eq!(convert_type("string"), "string");
        assert_eq!(convert_type("int"), "int");
        assert_eq!(convert_type("Widget"), "Widget");
    }

    #[test]
    fn test_convert_type_lists() {
        assert_eq!(convert_type("List[long]"), "[]uint64");
        assert_eq!(convert_type("List[Channel]"), "[]Channel");
        assert_eq!(convert_type("List[foo"), "[]foo");
    }

    #[test]
    fn test_convert_type_nested_list_is_shallow() {
        assert_eq!(convert_type("List[List[long]]"), "[]List[long]");
    }

    #[test]
    fn test_convert_type_idempotent_on_target_names() {
        for name in ["uint64", "float64", "bool", "string", "Widget"] {
            assert_eq!(convert_type(&convert_type(name)), convert_type(name));
        }
    }

    #[test]
    fn test_canonicalize() {
        assert_eq!(canonicalize("user_id").unwrap(), "User_ID");
        assert_eq!(canonicalize("channelId").unwrap(), "ChannelID");
        assert_eq!(canonicalize("asterisk_info").unwrap(), "Asterisk_Info");
        assert_eq!(canonicalize("name").unwrap(), "Name");
        assert_eq!(canonicalize("id").unwrap(), "ID");
        assert_eq!(canonicalize("x").unwrap(), "X");
    }

    #[test]
    fn test_canonicalize_id_anywhere() {
        assert_eq!(canonicalize("bridgeIdAndIdle").unwrap(), "BridgeIDAndIDle");
        assert_eq!(canonicalize("playback_id_list").unwrap(), "Playback_ID_List");
    }

    #[test]
    fn test_canonicalize_is_deterministic() {
        let first = canonicalize("user_id").unwrap();
        let second = canonicalize("user_id").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_canonicalize_empty() {
        assert!(matches!(
            canonicalize(""),
            Err(SchemaError::EmptyIdentifier { .. })
        ));
    }

    #[test]
    fn test_field_record_from_property() {
        let field = FieldRecord::from_property("creation_time", "Date").unwrap();
        assert_eq!(field.exported_name, "Creation_Time");
        assert_eq!(field.wire_name, "creation_time");
        assert_eq!(field.type_name, "string");
    }

    #[test]
    fn test_schema_ir_from_document() {
        let json = r#"{
            "apiVersion": "2.0.0",
            "basePath": "http://localhost:8088/ari",
            "apis": [{"path": "/bridges", "operations": [
                {"httpMethod": "GET", "nickname": "list", "responseClass": "List[Bridge]"}
            ]}],
            "models": {
                "Bridge": {"id": "Bridge", "properties": {
                    "id": {"type": "string"},
                    "channels": {"type": "List[string]"}
                }}
            }
        }"#;

        let doc = parse_document(json).expect("Failed to parse");
        let ir = SchemaIr::from_document("bridges", doc, InheritancePolicy::Reject)
            .expect("Failed to resolve");

        assert_eq!(ir.api_base, "bridges");
        assert_eq!(ir.api_version, "2.0.0");
        assert_eq!(ir.operation_count(), 1);

        let bridge = ir.get_type("Bridge").expect("Bridge type");
        assert_eq!(bridge.fields.len(), 2);
        assert_eq!(bridge.fields[1].type_name, "[]string");
        assert!(!bridge.has_parent());
        assert!(bridge.has_wire_name("channels"));
    }
}
