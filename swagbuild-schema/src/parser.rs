//! Schema document parser.
//!
//! This module decodes a JSON schema document into the typed [`Document`]
//! representation. Shape mismatches are reported with the JSON path of the
//! offending node, so a broken model or parameter is named in the error.

use crate::error::ParseError;
use crate::types::Document;
use serde_json::error::Category;

/// HTTP methods an operation may use.
const HTTP_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"];

/// Parses a schema document from a string.
///
/// # Arguments
/// * `json` - JSON document content
///
/// # Returns
/// Parsed document or parse error.
///
/// # Errors
/// Returns `ParseError::Json` for malformed JSON, `ParseError::Shape` when a
/// node has the wrong type or misses a required member, and
/// `ParseError::InvalidValue` for an unsupported HTTP method.
pub fn parse_document(json: &str) -> Result<Document, ParseError> {
    let de = &mut serde_json::Deserializer::from_str(json);
    let document: Document = serde_path_to_error::deserialize(de).map_err(|err| {
        let path = err.path().to_string();
        let inner = err.into_inner();
        match inner.classify() {
            Category::Data => ParseError::shape(path, inner.to_string()),
            Category::Io | Category::Syntax | Category::Eof => ParseError::Json(inner),
        }
    })?;

    validate_methods(&document)?;
    Ok(document)
}

/// Parses a schema document from a file.
///
/// # Errors
/// Returns `ParseError::Io` if the file cannot be read, otherwise the same
/// errors as [`parse_document`].
pub fn parse_document_file(path: &std::path::Path) -> Result<Document, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_document(&json)
}

/// Checks that every operation uses a known HTTP method.
///
/// The method is embedded verbatim in generated source, so anything outside
/// the known set is rejected here.
fn validate_methods(document: &Document) -> Result<(), ParseError> {
    for api in &document.apis {
        for op in &api.operations {
            if !HTTP_METHODS.contains(&op.http_method.as_str()) {
                return Err(ParseError::invalid_value(
                    format!("httpMethod of operation '{}' on '{}'", op.nickname, api.path),
                    op.http_method.clone(),
                ));
            }
        }
    }
    Ok(())
}
