//! Lint for patterns and paths that leave the source root.

use srcgen_config::Config;
use srcgen_core::is_relative_pattern;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on absolute paths and `..` components.
///
/// Applies to patterns, exclusion patterns and literal exclusions alike.
pub struct RelativePatternLint;

impl Lint for RelativePatternLint {
    fn name(&self) -> &'static str {
        "relative-pattern"
    }

    fn description(&self) -> &'static str {
        "Require patterns and paths to stay inside the source root"
    }

    fn check(&self, config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        for category in &config.categories {
            let entries = category
                .patterns
                .iter()
                .chain(&category.exclude_patterns)
                .chain(&category.exclude);
            for entry in entries {
                if !is_relative_pattern(entry) {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "'{}' in category '{}' must be relative to the source root",
                                entry, category.name
                            ),
                        )
                        .with_code(self.name())
                        .at(Diagnostic::category_location(&category.name)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use srcgen_config::CategoryDef;

    use super::*;

    fn check(category: CategoryDef) -> Vec<Diagnostic> {
        let config = Config {
            categories: vec![category],
            ..Config::default()
        };
        let mut diagnostics = Vec::new();
        RelativePatternLint.check(&config, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_relative_ok() {
        let diagnostics = check(
            CategoryDef::new("c", ["src/*.c", "./lib/*.c"])
                .excluding(["src/skip.c"])
                .excluding_patterns(["src/*_tmpl.c"]),
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_absolute_pattern() {
        let diagnostics = check(CategoryDef::new("c", ["/usr/src/*.c"]));

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
    }

    #[test]
    fn test_parent_components() {
        let diagnostics = check(
            CategoryDef::new("c", ["../other/*.c"])
                .excluding([r"src\..\..\x.c"])
                .excluding_patterns(["src/../../*.c"]),
        );

        assert_eq!(diagnostics.len(), 3);
        assert!(
            diagnostics
                .iter()
                .all(|d| d.code.as_deref() == Some("relative-pattern"))
        );
    }
}
