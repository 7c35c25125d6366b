//! Check operation - configuration and tree validation.

use std::path::Path;

use srcgen_codegen::pipeline::{CompilationContext, Pipeline, Severity};
use srcgen_config::ConfigFile;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline without rendering anything and returns its
/// diagnostics. A failing phase is reported, not propagated, so the
/// diagnostics that led to it are kept.
pub fn check(file: &ConfigFile, base_dir: Option<&Path>) -> CheckReport {
    let root = file.source_root(base_dir);
    let mut ctx = CompilationContext::new(file.config().clone(), &root);
    let outcome = Pipeline::new().run_in(&mut ctx);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    // Failures without a diagnostic, e.g. an unreadable directory
    if let Err(err) = outcome {
        if errors.is_empty() {
            errors.push(format!("{:#}", err));
        }
    }

    CheckReport {
        config_path: file.path().to_path_buf(),
        root,
        errors,
        warnings,
        infos,
        categories: ctx.category_counts().unwrap_or_default(),
    }
}
