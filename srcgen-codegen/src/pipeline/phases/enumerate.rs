//! Enumerate phase - globs every category's patterns.

use eyre::{Context, Result};
use indexmap::IndexMap;

use crate::{
    categorize::enumerate_category,
    pipeline::{CompilationContext, Phase},
};

/// Phase that enumerates the raw matches of every category.
///
/// Runs in configuration order and only reads the source tree. Any
/// filesystem error aborts the run.
pub struct EnumeratePhase;

impl Phase for EnumeratePhase {
    fn name(&self) -> &'static str {
        "enumerate"
    }

    fn description(&self) -> &'static str {
        "Match category patterns against the source tree"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let enumerator = ctx.enumerator();
        if !enumerator.base().is_dir() {
            tracing::warn!(root = %enumerator.base().display(), "source root does not exist");
        }

        let mut matches = IndexMap::with_capacity(ctx.config.categories.len());
        for category in &ctx.config.categories {
            let m = enumerate_category(category, &enumerator)
                .wrap_err_with(|| format!("failed to enumerate category '{}'", category.name))?;
            tracing::info!(
                category = %category.name,
                matched = m.matched.len(),
                excluded_by_pattern = m.pattern_excluded.len(),
                "enumerated category"
            );
            matches.insert(category.name.clone(), m);
        }

        ctx.matches = Some(matches);
        Ok(())
    }
}
