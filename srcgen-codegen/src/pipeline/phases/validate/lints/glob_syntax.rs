//! Lint for malformed glob patterns.

use glob::Pattern;
use srcgen_config::Config;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on patterns the glob matcher cannot parse.
pub struct GlobSyntaxLint;

impl Lint for GlobSyntaxLint {
    fn name(&self) -> &'static str {
        "glob-syntax"
    }

    fn description(&self) -> &'static str {
        "Reject malformed glob patterns"
    }

    fn check(&self, config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        for category in &config.categories {
            let patterns = category.patterns.iter().chain(&category.exclude_patterns);
            for pattern in patterns {
                if let Err(err) = Pattern::new(pattern) {
                    diagnostics.push(
                        Diagnostic::error(
                            "validate",
                            format!(
                                "invalid glob pattern '{}' in category '{}': {}",
                                pattern, category.name, err.msg
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
