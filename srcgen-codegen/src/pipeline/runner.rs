//! Pipeline orchestrator.

use std::path::PathBuf;

use eyre::{Result, WrapErr};
use srcgen_config::Config;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{AnalyzePhase, CategorizePhase, EnumeratePhase, ResolvePhase, ValidatePhase},
};

/// The pipeline orchestrator.
///
/// The pipeline manages the execution of phases and plugin hooks. It runs
/// the built-in phases (validate, resolve, enumerate, categorize, analyze)
/// followed by any user phases, calling plugin hooks before and after each
/// phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(SnapshotPlugin::with_output_dir("debug"))
///     .phase(MyCustomPhase);
///
/// let mut ctx = pipeline.run(config, "third_party/dav1d")?;
/// let manifest = ctx.take_manifest()?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with the default built-in phases and lints.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the validate phase, e.g. to run a custom set of lints.
    pub fn validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a configuration rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. The diagnostics gathered
    /// up to that point are lost; use [`Pipeline::run_in`] to keep them.
    pub fn run(&self, config: Config, root: impl Into<PathBuf>) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(config, root);
        self.run_in(&mut ctx)?;
        Ok(ctx)
    }

    /// Run the pipeline on an existing context.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - runs lints, fails on lint errors
    /// 2. ResolvePhase - computes the evaluation order
    /// 3. EnumeratePhase - globs patterns under the root
    /// 4. CategorizePhase - applies exclusions, builds the manifest
    /// 5. AnalyzePhase - reports overlaps and empty categories
    /// 6. User phases (if any)
    pub fn run_in(&self, ctx: &mut CompilationContext) -> Result<()> {
        let builtin_phases: [&dyn Phase; 5] = [
            &self.validate,
            &ResolvePhase,
            &EnumeratePhase,
            &CategorizePhase,
            &AnalyzePhase,
        ];

        for phase in builtin_phases {
            self.run_phase(phase, ctx)?;
        }
        for phase in &self.phases {
            self.run_phase(phase.as_ref(), ctx)?;
        }

        Ok(())
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        let _span = tracing::info_span!("phase", name = phase_name).entered();

        for plugin in &self.plugins {
            plugin
                .on_before_phase(phase_name, ctx)
                .wrap_err_with(|| format!("plugin '{}' failed before {}", plugin.name(), phase_name))?;
        }

        tracing::debug!(description = phase.description(), "running phase");
        let diagnostics_before = ctx.diagnostics.len();
        phase.run(ctx)?;
        tracing::debug!(
            diagnostics = ctx.diagnostics.len() - diagnostics_before,
            "phase finished"
        );

        for plugin in &self.plugins {
            plugin
                .on_after_phase(phase_name, ctx)
                .wrap_err_with(|| format!("plugin '{}' failed after {}", plugin.name(), phase_name))?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
