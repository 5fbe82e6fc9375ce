//! Go code generation modules.

pub mod client;
pub mod preamble;
pub mod structs;

pub use client::{ClientFunction, ClientGenerator};
pub use structs::StructGenerator;

/// Quotes a string as a Go interpreted string literal.
#[must_use]
pub fn go_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Formats a one-line `// name text` doc comment, or nothing for empty text.
#[must_use]
pub fn doc_comment(name: &str, text: Option<&str>) -> String {
    let text = text
        .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    if text.is_empty() {
        String::new()
    } else {
        format!("// {name} {text}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_quote() {
        assert_eq!(go_quote("plain"), "\"plain\"");
        assert_eq!(go_quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(go_quote("a\\b"), "\"a\\\\b\"");
        assert_eq!(go_quote("line\nbreak"), "\"line\\nbreak\"");
    }

    #[test]
    fn test_doc_comment() {
        assert_eq!(doc_comment("Channel", None), "");
        assert_eq!(doc_comment("Channel", Some("  ")), "");
        assert_eq!(
            doc_comment("Channel", Some("A specific\n  communication connection.")),
            "// Channel A specific communication connection.\n"
        );
    }
}
