//! Categorize phase - applies exclusions and builds the manifest.

use eyre::{Result, eyre};

use crate::{
    categorize::finalize,
    pipeline::{CompilationContext, Phase},
};

/// Phase that turns raw matches into final category sets.
///
/// Must run after `ResolvePhase` and `EnumeratePhase`.
pub struct CategorizePhase;

impl Phase for CategorizePhase {
    fn name(&self) -> &'static str {
        "categorize"
    }

    fn description(&self) -> &'static str {
        "Apply exclusions and build the manifest"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let names = ctx
            .order
            .as_ref()
            .ok_or_else(|| eyre!("order not set - CategorizePhase must run after ResolvePhase"))?;
        let matches = ctx.matches.as_ref().ok_or_else(|| {
            eyre!("matches not set - CategorizePhase must run after EnumeratePhase")
        })?;

        let categories = &ctx.config.categories;
        let order = names
            .iter()
            .map(|name| {
                categories
                    .iter()
                    .position(|c| &c.name == name)
                    .ok_or_else(|| eyre!("unknown category '{}' in evaluation order", name))
            })
            .collect::<Result<Vec<_>>>()?;

        let manifest = finalize(categories, &order, matches)?;
        tracing::info!(
            categories = manifest.len(),
            files = manifest.total_files(),
            "built manifest"
        );
        ctx.manifest = Some(manifest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use srcgen_config::{CategoryDef, Config};
    use tempfile::TempDir;

    use super::*;
    use crate::pipeline::phases::{EnumeratePhase, ResolvePhase};

    #[test]
    fn test_requires_previous_phases() {
        let mut ctx = CompilationContext::new(Config::default(), ".");
        assert!(CategorizePhase.run(&mut ctx).is_err());

        ctx.order = Some(Vec::new());
        assert!(CategorizePhase.run(&mut ctx).is_err());
    }

    #[test]
    fn test_builds_manifest() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        for file in ["a.c", "a_tmpl.c", "b.h"] {
            fs::write(temp.path().join("src").join(file), "").unwrap();
        }

        let config = Config {
            categories: vec![
                CategoryDef::new("c_sources", ["src/*.c"]).excluding_categories(["templates"]),
                CategoryDef::new("templates", ["src/*_tmpl.c"]),
            ],
            ..Config::default()
        };
        let mut ctx = CompilationContext::new(config, temp.path());

        ResolvePhase.run(&mut ctx).unwrap();
        EnumeratePhase.run(&mut ctx).unwrap();
        CategorizePhase.run(&mut ctx).unwrap();

        let manifest = ctx.take_manifest().unwrap();
        let names: Vec<_> = manifest.names().collect();
        assert_eq!(names, ["c_sources", "templates"]);
        assert_eq!(manifest.get("c_sources").unwrap().len(), 1);
    }
}
