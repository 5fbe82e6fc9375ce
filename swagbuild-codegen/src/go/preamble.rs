//! Package line, imports and the request-body helper.

use super::client::IMPORT_JSON;
use std::collections::BTreeSet;

/// Helper encoding the parameter map as the request body.
pub const BUILD_JSON_HELPER: &str = r#"func buildJSON(params map[string]string) string {
	body, err := json.Marshal(params)
	if err != nil {
		return "{}"
	}
	return string(body)
}

"#;

/// Generates the package declaration.
#[must_use]
pub fn package_line(package_name: &str) -> String {
    format!("package {package_name}\n\n")
}

/// Generates the API preamble: imports followed by the body helper.
///
/// `encoding/json` is always imported since the helper needs it.
#[must_use]
pub fn api_preamble(imports: &BTreeSet<&str>) -> String {
    let mut all: BTreeSet<&str> = imports.clone();
    all.insert(IMPORT_JSON);

    let mut output = String::from("import (\n");
    for path in &all {
        output.push_str(&format!("\t\"{path}\"\n"));
    }
    output.push_str(")\n\n");
    output.push_str(BUILD_JSON_HELPER);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_line() {
        assert_eq!(package_line("ari"), "package ari\n\n");
    }

    #[test]
    fn test_api_preamble_minimal() {
        let output = api_preamble(&BTreeSet::new());
        assert!(output.starts_with("import (\n\t\"encoding/json\"\n)\n\n"));
        assert!(output.contains("func buildJSON(params map[string]string) string {"));
    }

    #[test]
    fn test_api_preamble_sorted_imports() {
        let imports: BTreeSet<&str> = ["fmt", "errors"].into();
        let output = api_preamble(&imports);
        assert!(output.starts_with(
            "import (\n\t\"encoding/json\"\n\t\"errors\"\n\t\"fmt\"\n)\n\n"
        ));
    }
}
