//! Resolve phase - orders categories by their exclusion dependencies.

use eyre::{Result, bail};

use crate::{
    pipeline::{CompilationContext, Diagnostic, Phase},
    resolve::{ResolveError, evaluation_order},
};

/// Phase that computes the evaluation order of the categories.
///
/// A category is evaluated after every category it excludes. Exclusion
/// cycles are recorded as an error diagnostic and abort the run.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Order categories by exclusion dependencies"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        match evaluation_order(&ctx.config.categories) {
            Ok(order) => {
                let names: Vec<String> = order
                    .iter()
                    .map(|&i| ctx.config.categories[i].name.clone())
                    .collect();
                tracing::debug!(order = ?names, "resolved evaluation order");
                ctx.order = Some(names);
                Ok(())
            }
            Err(err) => {
                let (code, location) = match &err {
                    ResolveError::UnknownReference { category, .. } => {
                        ("unknown-category", category.as_str())
                    }
                    ResolveError::Cycle { members } => (
                        "exclusion-cycle",
                        members.first().map(String::as_str).unwrap_or_default(),
                    ),
                };
                ctx.add_diagnostic(
                    Diagnostic::error(self.name(), err.to_string())
                        .with_code(code)
                        .at(Diagnostic::category_location(location)),
                );
                bail!(err)
            }
        }
    }
}
