//! Validation context and utilities for configuration parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Errors created through the context point back into the TOML source, so
/// miette can render the offending line.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "sources.toml");
/// ctx.validate_name("c_sources")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext {
    source: Arc<SourceContext>,
}

impl ParseContext {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Find the span of the `nth` definition of a category name.
    pub fn find_definition_span(&self, name: &str, nth: usize) -> Option<SourceSpan> {
        find_name_spans(self.source.src(), name).into_iter().nth(nth)
    }

    /// Find the span of a category reference inside an `exclude_categories` list.
    pub fn find_reference_span(&self, reference: &str) -> Option<SourceSpan> {
        find_reference_span(self.source.src(), reference)
    }

    /// Validate that a category name is usable as a GN variable name.
    pub fn validate_name(&self, name: &str) -> Result<()> {
        let span = self.find_definition_span(name, 0);

        if is_gn_keyword(name) {
            return Err(self.source.reserved_keyword_error(name, span));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(name, reason, span));
        }

        Ok(())
    }
}

/// Words GN reserves that cannot be used as variable names.
pub(crate) const GN_KEYWORDS: &[&str] = &["if", "else", "true", "false"];

/// Check if a name is a GN reserved word
pub(crate) fn is_gn_keyword(name: &str) -> bool {
    GN_KEYWORDS.contains(&name)
}

/// Find every `name = "<name>"` definition span in the TOML source.
///
/// Both quote styles and the tight `name="..."` form are recognised. Spans
/// cover the name itself, not the quotes.
pub(crate) fn find_name_spans(src: &str, name: &str) -> Vec<SourceSpan> {
    let mut spans = Vec::new();
    let mut offset = 0;

    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();

        if let Some(rest) = trimmed.strip_prefix("name") {
            let after_key = rest.trim_start();
            if let Some(value) = after_key.strip_prefix('=') {
                let value = value.trim_start();
                for quote in ['"', '\''] {
                    let quoted = format!("{quote}{name}{quote}");
                    if value.starts_with(&quoted) {
                        let start = offset + indent + (trimmed.len() - value.len()) + 1;
                        spans.push(SourceSpan::from((start, name.len())));
                    }
                }
            }
        }

        offset += line.len();
    }

    spans
}

/// Find a quoted reference to `reference` after an `exclude_categories` key.
pub(crate) fn find_reference_span(src: &str, reference: &str) -> Option<SourceSpan> {
    let mut search_from = 0;

    while let Some(pos) = src[search_from..].find("exclude_categories") {
        let key_end = search_from + pos + "exclude_categories".len();
        // The list ends at the closing bracket of the array
        let list_end = src[key_end..]
            .find(']')
            .map(|p| key_end + p)
            .unwrap_or(src.len());
        let list = &src[key_end..list_end];

        for quote in ['"', '\''] {
            let quoted = format!("{quote}{reference}{quote}");
            if let Some(p) = list.find(&quoted) {
                return Some(SourceSpan::from((key_end + p + 1, reference.len())));
            }
        }

        search_from = key_end;
    }

    None
}

/// Validate that a name is a valid GN identifier.
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
        assert!(validate_identifier("c_sources").is_none());
        assert!(validate_identifier("x86_asm_sources").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("ARM64").is_none());
    }

    #[test]
    fn test_invalid_start_character() {
        assert!(validate_identifier("86_sources").is_some());
        assert!(validate_identifier("-sources").is_some());
    }

    #[test]
    fn test_invalid_characters() {
        assert!(validate_identifier("c-sources").is_some());
        assert!(validate_identifier("c.sources").is_some());
        assert!(validate_identifier("c sources").is_some());
    }

    #[test]
    fn test_empty_name() {
        assert!(validate_identifier("").is_some());
    }

    #[test]
    fn test_is_gn_keyword() {
        assert!(is_gn_keyword("if"));
        assert!(is_gn_keyword("true"));
        assert!(!is_gn_keyword("sources"));
    }

    #[test]
    fn test_find_name_spans() {
        let src = r#"[[category]]
name = "c_sources"
patterns = ["src/*.c"]
"#;
        let spans = find_name_spans(src, "c_sources");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].offset(), 21); // Position of 'c' in 'c_sources'
        assert_eq!(spans[0].len(), 9);
    }

    #[test]
    fn test_find_name_spans_duplicates_and_quotes() {
        let src = "[[category]]\nname = \"a\"\n\n[[category]]\n  name='a'\n";
        let spans = find_name_spans(src, "a");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].offset(), 21);
        assert_eq!(spans[1].offset(), 46);
    }

    #[test]
    fn test_find_name_spans_ignores_prefixes() {
        let src = "name = \"c_sources_extra\"\nname = \"c_sources\"\n";
        let spans = find_name_spans(src, "c_sources");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].offset(), 33);
    }

    #[test]
    fn test_find_reference_span() {
        let src = r#"[[category]]
name = "templates"

[[category]]
name = "c_sources"
exclude_categories = ["headers", "templates"]
"#;
        let span = find_reference_span(src, "templates").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "templates");
        assert!(span.offset() > src.find("exclude_categories").unwrap());
    }

    #[test]
    fn test_find_reference_span_missing() {
        let src = "name = \"templates\"\n";
        assert!(find_reference_span(src, "templates").is_none());
    }
}
