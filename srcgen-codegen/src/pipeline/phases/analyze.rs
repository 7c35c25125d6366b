//! Analyze phase - reports suspicious results of categorization.

use eyre::{Result, eyre};
use srcgen_config::CategoryDef;

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// Phase that inspects the final manifest.
///
/// Reports two things, neither of which stops the run:
/// - `undeclared-overlap`: two categories list the same file and neither
///   excludes the other
/// - `empty-category`: a category ends up with no files
///
/// This phase must run after `CategorizePhase`.
pub struct AnalyzePhase;

const OVERLAP_CODE: &str = "undeclared-overlap";
const EMPTY_CODE: &str = "empty-category";

fn excludes_either(a: &CategoryDef, b: &CategoryDef) -> bool {
    a.excludes_category(&b.name) || b.excludes_category(&a.name)
}

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Report overlapping and empty categories"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let manifest = ctx
            .manifest
            .as_ref()
            .ok_or_else(|| eyre!("manifest not set - AnalyzePhase must run after CategorizePhase"))?;

        let mut found = Vec::new();
        let categories = &ctx.config.categories;

        for (i, a) in categories.iter().enumerate() {
            let Some(a_files) = manifest.get(&a.name) else {
                continue;
            };
            for b in &categories[i + 1..] {
                if excludes_either(a, b) {
                    continue;
                }
                let Some(b_files) = manifest.get(&b.name) else {
                    continue;
                };
                let shared: Vec<_> = a_files.intersection(b_files).collect();
                let Some(first) = shared.first() else {
                    continue;
                };
                found.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "categories '{}' and '{}' both list {} file(s), starting with '{}'; \
                             exclude one from the other",
                            a.name,
                            b.name,
                            shared.len(),
                            first
                        ),
                    )
                    .with_code(OVERLAP_CODE)
                    .at(Diagnostic::category_location(&b.name)),
                );
            }
        }

        for (name, files) in manifest.iter() {
            if !files.is_empty() {
                continue;
            }
            let message = match ctx.raw_matches(name) {
                Some(raw) if !raw.is_empty() => {
                    format!("category '{}' is empty after exclusions", name)
                }
                _ => format!("category '{}' matched no files", name),
            };
            found.push(
                Diagnostic::info(self.name(), message)
                    .with_code(EMPTY_CODE)
                    .at(Diagnostic::category_location(name)),
            );
        }

        for diagnostic in &found {
            tracing::debug!(%diagnostic, "analysis finding");
        }
        ctx.diagnostics.extend(found);
        Ok(())
    }
}
