//! # swagbuild Codegen
//!
//! Go code generation from Swagger 1.2 documents.
//!
//! This crate provides:
//! - Struct declarations for resolved models
//! - Client functions for API operations
//! - Preamble (imports and request-body helper) generation
//! - Assembly of the output unit

pub mod config;
pub mod error;
pub mod generator;
pub mod go;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::{FunctionNames, Generator};

use swagbuild_schema::{InheritancePolicy, SchemaIr};

/// Generates Go code from one schema document string.
///
/// # Arguments
/// * `api_base` - API base name, prefixed to every function name
/// * `json` - Schema document content
/// * `config` - Generator configuration
///
/// # Returns
/// Generated Go code as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing, resolution or generation fails.
pub fn generate_from_json(
    api_base: &str,
    json: &str,
    config: &GeneratorConfig,
) -> Result<String, CodegenError> {
    let document = swagbuild_schema::parse_document(json)?;
    let ir = SchemaIr::from_document(api_base, document, InheritancePolicy::default())?;
    Generator::new(config).generate(&[ir])
}

/// Generates Go code from one schema document file.
///
/// The file stem is used as the API base name.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, resolution or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &GeneratorConfig,
) -> Result<String, CodegenError> {
    let api_base = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            CodegenError::generation(format!("cannot derive API name from '{}'", path.display()))
        })?;
    let json = std::fs::read_to_string(path)?;
    generate_from_json(api_base, &json, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ASTERISK: &str = r#"{
        "apiVersion": "1.0.0",
        "basePath": "http://localhost:8088/ari",
        "apis": [{"path": "/asterisk/info", "operations": [{
            "httpMethod": "GET",
            "summary": "Gets Asterisk system information.",
            "nickname": "getInfo",
            "responseClass": "AsteriskInfo",
            "parameters": [{"name": "only", "paramType": "query", "required": false,
                            "allowMultiple": true, "dataType": "string"}]
        }]}],
        "models": {"AsteriskInfo": {"id": "AsteriskInfo", "properties": {
            "system": {"type": "object"}
        }}}
    }"#;

    #[test]
    fn test_generate_from_json() {
        let output = generate_from_json("asterisk", ASTERISK, &GeneratorConfig::default())
            .expect("Failed to generate");

        assert!(
            output.contains("type AsteriskInfo struct {\n\tSystem string `json:\"system\"`\n}\n")
        );
        assert!(output.contains(
            "func (a *AppInstance) AsteriskGetInfo(options ...string) (AsteriskInfo, error) {"
        ));
    }

    #[test]
    fn test_generate_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("asterisk.json");
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(ASTERISK.as_bytes()).expect("write");

        let output =
            generate_from_file(&path, &GeneratorConfig::default()).expect("Failed to generate");
        assert!(output.contains("AsteriskGetInfo"));
    }

    #[test]
    fn test_generate_from_json_reports_cycle() {
        let json = r#"{"apis": [], "models": {
            "A": {"subTypes": ["B"]},
            "B": {"subTypes": ["A"]}
        }}"#;
        let result = generate_from_json("loop", json, &GeneratorConfig::default());
        assert!(matches!(
            result,
            Err(CodegenError::Schema(
                swagbuild_schema::SchemaError::CyclicInheritance { .. }
            ))
        ));
    }
}
