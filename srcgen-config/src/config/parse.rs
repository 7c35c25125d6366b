//! Configuration parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use super::{Config, DEFAULT_CONFIG_FILE, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, DEFAULT_CONFIG_FILE)
    }
}

impl Config {
    /// Parse a sources.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse a sources.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

/// Parse a configuration from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_config(&config, content, filename)?;
    Ok(config)
}

/// Validate category names and exclusion references after parsing.
///
/// Cycles between categories are not rejected here; they only surface once
/// an evaluation order is computed.
fn validate_config(config: &Config, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for category in &config.categories {
        ctx.validate_name(&category.name)?;

        let count = seen.entry(category.name.as_str()).or_insert(0);
        if *count > 0 {
            return Err(ctx.source_context().duplicate_category_error(
                &category.name,
                ctx.find_definition_span(&category.name, 0),
                ctx.find_definition_span(&category.name, *count),
            ));
        }
        *count += 1;
    }

    for category in &config.categories {
        for reference in &category.exclude_categories {
            if !seen.contains_key(reference.as_str()) {
                return Err(ctx.source_context().unknown_category_error(
                    &category.name,
                    reference,
                    ctx.find_reference_span(reference),
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{Exclusion, OutputFormat};

    #[test]
    fn test_parse_full_config() {
        let config: Config = r#"
            [output]
            path = "dav1d_generated.gni"
            format = "gn"
            generator = "dav1d/generate_sources.py"

            [source]
            root = "third_party/dav1d"

            [[category]]
            name = "template_sources"
            patterns = ["libdav1d/src/*_tmpl.c"]

            [[category]]
            name = "c_sources"
            description = "Generic C sources"
            patterns = ["libdav1d/src/*.c"]
            exclude_categories = ["template_sources"]
        "#
        .parse()
        .unwrap();

        assert_eq!(config.output.path, PathBuf::from("dav1d_generated.gni"));
        assert_eq!(config.output.format, OutputFormat::Gn);
        assert_eq!(config.output.generator, "dav1d/generate_sources.py");
        assert_eq!(config.source.root, PathBuf::from("third_party/dav1d"));

        let names: Vec<_> = config.category_names().collect();
        assert_eq!(names, ["template_sources", "c_sources"]);

        let c_sources = config.category("c_sources").unwrap();
        assert_eq!(
            c_sources.exclusions().collect::<Vec<_>>(),
            [Exclusion::Category("template_sources")]
        );
    }

    #[test]
    fn test_defaults() {
        let config: Config = "".parse().unwrap();

        assert!(config.categories.is_empty());
        assert_eq!(config.source.root, PathBuf::from("."));
        assert_eq!(config.output.format, OutputFormat::Gn);
        assert_eq!(config.output.copyright_holder, "The Chromium Authors");
        assert_eq!(config.output.license.len(), 2);
    }

    #[test]
    fn test_category_without_exclusions() {
        let config: Config = r#"
            [[category]]
            name = "c_headers"
            patterns = ["src/*.h"]
        "#
        .parse()
        .unwrap();

        let headers = config.category("c_headers").unwrap();
        assert!(headers.exclude.is_empty());
        assert!(headers.exclude_patterns.is_empty());
        assert!(headers.exclude_categories.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_str("[[category]\nname = 1").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Config::from_str(
            r#"
            [[category]]
            name = "c_sources"
            pattern = ["src/*.c"]
        "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_name() {
        let err = Config::from_str(
            r#"
            [[category]]
            name = "c-sources"
        "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { ref name, .. } if name == "c-sources"));
    }

    #[test]
    fn test_reserved_name() {
        let err = Config::from_str(
            r#"
            [[category]]
            name = "if"
        "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_duplicate_category() {
        let err = Config::from_str(
            r#"
            [[category]]
            name = "c_sources"

            [[category]]
            name = "c_sources"
        "#,
        )
        .unwrap_err();

        match *err {
            Error::DuplicateCategory {
                ref name,
                first_span,
                second_span,
                ..
            } => {
                assert_eq!(name, "c_sources");
                assert!(first_span.unwrap().offset() < second_span.unwrap().offset());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_category_reference() {
        let err = Config::from_str(
            r#"
            [[category]]
            name = "c_sources"
            patterns = ["src/*.c"]
            exclude_categories = ["templates"]
        "#,
        )
        .unwrap_err();

        match *err {
            Error::UnknownCategory {
                ref category,
                ref reference,
                span,
                ..
            } => {
                assert_eq!(category, "c_sources");
                assert_eq!(reference, "templates");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_cycles_are_left_to_resolution() {
        let config = Config::from_str(
            r#"
            [[category]]
            name = "a"
            exclude_categories = ["b"]

            [[category]]
            name = "b"
            exclude_categories = ["a"]
        "#,
        );
        assert!(config.is_ok());
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file("/nonexistent/sources.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
