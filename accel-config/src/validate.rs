//! Validation utilities for Swift identifiers

use miette::SourceSpan;

use crate::{Error, Result};

/// Validation context that carries source information for diagnostics.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> ParseContext<'a> {
    pub(crate) fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    /// Find the span of a value in the source.
    pub(crate) fn find_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.src, value)
    }

    /// Find the span of a `field = ...` assignment in the source.
    pub(crate) fn find_field_span(&self, field: &str) -> Option<SourceSpan> {
        find_field_span(self.src, field)
    }

    pub(crate) fn validation_error(&self, message: &str, field: &str) -> Box<Error> {
        Error::validation(
            message,
            self.src,
            self.filename,
            self.find_field_span(field),
        )
    }

    /// Validate that a name is a valid Swift identifier.
    ///
    /// Checks for reserved keywords and valid identifier format.
    pub(crate) fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_swift_keyword(name) {
            return Err(Error::reserved_keyword(
                name,
                kind,
                self.src,
                self.filename,
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(Error::invalid_identifier(
                name,
                kind,
                reason,
                self.src,
                self.filename,
                self.find_span(name),
            ));
        }

        Ok(())
    }
}

/// Swift reserved keywords that cannot be used as type names without backticks
pub(crate) const SWIFT_KEYWORDS: &[&str] = &[
    // Declarations
    "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func", "import",
    "init", "inout", "internal", "let", "open", "operator", "private", "protocol", "public",
    "rethrows", "static", "struct", "subscript", "typealias", "var",
    // Statements
    "break", "case", "continue", "default", "defer", "do", "else", "fallthrough", "for", "guard",
    "if", "in", "repeat", "return", "switch", "where", "while",
    // Expressions and types
    "as", "Any", "catch", "false", "is", "nil", "super", "self", "Self", "throw", "throws", "true",
    "try",
];

/// Check if a name is a Swift reserved keyword
pub(crate) fn is_swift_keyword(name: &str) -> bool {
    SWIFT_KEYWORDS.contains(&name)
}

/// Find the span of a string value in the TOML source
fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    if let Some(pos) = src.find(&quoted) {
        // +1 to skip the opening quote
        return Some(SourceSpan::from((pos + 1, value.len())));
    }

    // Fallback: just find the value anywhere (less precise)
    src.find(value)
        .map(|pos| SourceSpan::from((pos, value.len())))
}

/// Find the span of a top-level `field = value` key in the TOML source
///
/// Only a key at the start of a line followed by `=` matches, so the name
/// inside comments, values or longer keys is skipped.
fn find_field_span(src: &str, field: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if let Some(rest) = trimmed.strip_prefix(field) {
            if rest.trim_start().starts_with('=') {
                return Some(SourceSpan::from((offset + indent, field.len())));
            }
        }
        offset += line.len();
    }
    None
}

/// Validate that a name is a valid Swift identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("Person").is_none());
        assert!(validate_identifier("BaseModel").is_none());
        assert!(validate_identifier("_Private").is_none());
        assert!(validate_identifier("Model2").is_none());
        assert!(validate_identifier("NS").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2Model").is_some());
        assert!(validate_identifier("my-model").is_some());
        assert!(validate_identifier("my model").is_some());
        assert!(validate_identifier("Model.swift").is_some());
    }

    #[test]
    fn test_swift_keywords() {
        assert!(is_swift_keyword("struct"));
        assert!(is_swift_keyword("class"));
        assert!(is_swift_keyword("guard"));
        assert!(is_swift_keyword("Self"));
        assert!(!is_swift_keyword("Person"));
    }

    #[test]
    fn test_find_value_span() {
        let src = "base_class_name = \"class\"\n";
        let span = find_value_span(src, "class").unwrap();
        assert_eq!(span.offset(), 19);
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn test_find_field_span_skips_comments_and_longer_keys() {
        let src = "# file_path is relative\nbase_file_path = \"x\"\n  file_path = \"\"\n";
        let span = find_field_span(src, "file_path").unwrap();
        assert_eq!(span.offset(), src.find("  file_path =").unwrap() + 2);
        assert_eq!(span.len(), "file_path".len());
    }

    #[test]
    fn test_find_field_span_without_spaces() {
        let src = "file_path=\"\"\n";
        let span = find_field_span(src, "file_path").unwrap();
        assert_eq!(span.offset(), 0);
    }

    #[test]
    fn test_find_field_span_missing() {
        assert!(find_field_span("# file_path\n", "file_path").is_none());
    }

    #[test]
    fn test_validate_name_reports_keyword() {
        let src = "base_class_name = \"struct\"\n";
        let ctx = ParseContext::new(src, "accelerator.toml");
        let err = ctx.validate_name("struct", "base class name").unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }
}
