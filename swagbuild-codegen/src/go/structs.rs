//! Struct declaration generation.

use super::{doc_comment, go_quote};
use swagbuild_schema::ir::{FieldRecord, TypeRecord};

/// Generator for model struct declarations.
pub struct StructGenerator<'a> {
    types: Vec<&'a TypeRecord>,
}

impl<'a> StructGenerator<'a> {
    /// Creates a struct generator over resolved types, in emission order.
    #[must_use]
    pub fn new(types: impl IntoIterator<Item = &'a TypeRecord>) -> Self {
        Self {
            types: types.into_iter().collect(),
        }
    }

    /// Generates all struct declarations.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        for record in &self.types {
            output.push_str(&self.generate_struct(record));
        }
        output
    }

    /// Generates one struct declaration.
    fn generate_struct(&self, record: &TypeRecord) -> String {
        let mut output = String::new();

        output.push_str(&doc_comment(&record.name, record.description.as_deref()));
        output.push_str(&format!("type {} struct {{\n", record.name));
        for field in &record.fields {
            output.push_str(&generate_field(field));
        }
        output.push_str("}\n\n");

        output
    }
}

/// Generates a field line tagged with its wire name.
fn generate_field(field: &FieldRecord) -> String {
    format!(
        "\t{} {} {}\n",
        field.exported_name,
        field.type_name,
        struct_tag(&field.wire_name)
    )
}

/// Formats the `json` tag of a wire name.
///
/// A wire name holding a backtick cannot sit in a raw string, so the whole
/// tag becomes an interpreted literal.
fn struct_tag(wire_name: &str) -> String {
    let tag = format!("json:{}", go_quote(wire_name));
    if tag.contains('`') {
        go_quote(&tag)
    } else {
        format!("`{tag}`")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(exported: &str, wire: &str, ty: &str) -> FieldRecord {
        FieldRecord {
            exported_name: exported.to_string(),
            wire_name: wire.to_string(),
            type_name: ty.to_string(),
        }
    }

    #[test]
    fn test_generate_struct() {
        let mut record = TypeRecord::new("Channel");
        record.description = Some("A specific communication connection.".to_string());
        record.fields.push(field("ID", "id", "string"));
        record.fields.push(field("Creationtime", "creationtime", "string"));

        let output = StructGenerator::new([&record]).generate();

        assert_eq!(
            output,
            "// Channel A specific communication connection.\n\
             type Channel struct {\n\
             \tID string `json:\"id\"`\n\
             \tCreationtime string `json:\"creationtime\"`\n\
             }\n\n"
        );
    }

    #[test]
    fn test_generate_empty_struct() {
        let record = TypeRecord::new("Empty");
        let output = StructGenerator::new([&record]).generate();
        assert_eq!(output, "type Empty struct {\n}\n\n");
    }

    #[test]
    fn test_generate_keeps_order() {
        let a = TypeRecord::new("Zulu");
        let b = TypeRecord::new("Alpha");
        let output = StructGenerator::new([&a, &b]).generate();
        let zulu = output.find("type Zulu").expect("Zulu emitted");
        let alpha = output.find("type Alpha").expect("Alpha emitted");
        assert!(zulu < alpha);
    }

    #[test]
    fn test_field_tag_keeps_wire_name() {
        let line = generate_field(&field("Asterisk_ID", "asterisk_id", "string"));
        assert_eq!(line, "\tAsterisk_ID string `json:\"asterisk_id\"`\n");
    }

    #[test]
    fn test_struct_tag_escapes_quote() {
        assert_eq!(struct_tag("say\"hi"), "`json:\"say\\\"hi\"`");
    }

    #[test]
    fn test_struct_tag_with_backtick_is_interpreted() {
        assert_eq!(struct_tag("a`b"), "\"json:\\\"a`b\\\"\"");
    }
}
