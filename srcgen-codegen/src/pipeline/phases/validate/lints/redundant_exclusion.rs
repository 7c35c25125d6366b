//! Lint for exclusions listed more than once.

use std::collections::HashSet;

use srcgen_config::Config;
use srcgen_core::FilePath;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when a category repeats an exclusion.
///
/// Literal paths are compared after normalization, so `./src/a.c` and
/// `src\a.c` count as the same entry.
pub struct RedundantExclusionLint;

impl RedundantExclusionLint {
    fn warn(&self, category: &str, what: &str, entry: &str) -> Diagnostic {
        Diagnostic::warning(
            "validate",
            format!(
                "category '{}' excludes {} '{}' more than once",
                category, what, entry
            ),
        )
        .with_code(self.name())
        .at(Diagnostic::category_location(category))
    }
}

impl Lint for RedundantExclusionLint {
    fn name(&self) -> &'static str {
        "redundant-exclusion"
    }

    fn description(&self) -> &'static str {
        "Warn about exclusions listed more than once"
    }

    fn check(&self, config: &Config, diagnostics: &mut Vec<Diagnostic>) {
        for category in &config.categories {
            let mut paths = HashSet::new();
            for path in &category.exclude {
                let normalized = FilePath::new(path);
                if !paths.insert(normalized) {
                    diagnostics.push(self.warn(&category.name, "path", path));
                }
            }

            let mut patterns = HashSet::new();
            for pattern in &category.exclude_patterns {
                if !patterns.insert(pattern.as_str()) {
                    diagnostics.push(self.warn(&category.name, "pattern", pattern));
                }
            }

            let mut categories = HashSet::new();
            for other in &category.exclude_categories {
                if !categories.insert(other.as_str()) {
                    diagnostics.push(self.warn(&category.name, "category", other));
                }
            }
        }
    }
}
