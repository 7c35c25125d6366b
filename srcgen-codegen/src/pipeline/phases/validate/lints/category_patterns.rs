//! Lint for categories that can never match a file.

use srcgen_config::Config;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about categories without any pattern.
///
/// Such a category is always emitted as an empty list.
pub struct CategoryPatternsLint;

impl Lint for CategoryPatternsLint {
    fn name(&self) -> &'static str {
        "category-patterns"
    }

    fn description(&self) -> &'static str {
        "Warn about categories with no patterns"
    }

    fn check(&self, config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        for category in &config.categories {
            if category.patterns.is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "category '{}' has no patterns and will always be empty",
                            category.name
                        ),
                    )
                    .with_code(self.name())
                    .at(Diagnostic::category_location(&category.name)),
                );
            }
        }
    }
}
