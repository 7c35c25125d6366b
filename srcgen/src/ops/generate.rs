//! Generate operation - from configuration to artifact.

use std::path::Path;

use eyre::{Context, Result};
use srcgen_codegen::{
    emit::{Header, render, write_artifact},
    pipeline::{Pipeline, Severity, SnapshotPlugin},
};
use srcgen_config::{ConfigFile, OutputFormat};
use srcgen_core::File;

use crate::reports::{GenerateReport, GenerationResult};

/// What to do with the rendered artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerateMode {
    /// Replace the artifact on disk.
    #[default]
    Write,
    /// Return the artifact without touching the disk.
    DryRun,
    /// Compare with the artifact on disk.
    Check,
}

/// Options for the generate operation.
#[derive(Debug, Default)]
pub struct GenerateOptions<'a> {
    /// Source root overriding `[source] root`.
    pub base_dir: Option<&'a Path>,
    /// Artifact path overriding `[output] path`.
    pub output: Option<&'a Path>,
    /// Copyright year; defaults to the current year.
    pub year: Option<i32>,
    /// Format overriding `[output] format`.
    pub format: Option<OutputFormat>,
    pub mode: GenerateMode,
    /// Directory receiving one JSON snapshot per pipeline phase.
    pub dump_phases: Option<&'a Path>,
}

/// Execute the generate operation.
///
/// Runs the pipeline over the source tree, renders the manifest and writes,
/// previews or checks the artifact. Nothing is written when the pipeline
/// fails.
pub fn generate(file: &ConfigFile, opts: GenerateOptions) -> Result<GenerateReport> {
    let config = file.config();
    let root = file.source_root(opts.base_dir);
    let output_path = file.output_path(opts.output);
    let format = opts.format.unwrap_or(config.output.format);

    let mut pipeline = Pipeline::new();
    if let Some(dir) = opts.dump_phases {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(dir));
    }
    let mut ctx = pipeline
        .run(config.clone(), &root)
        .wrap_err_with(|| format!("failed to categorize sources under '{}'", root.display()))?;

    let warnings: Vec<String> = ctx
        .diagnostics
        .iter()
        .filter(|d| matches!(d.severity, Severity::Warning))
        .map(|d| d.message.clone())
        .collect();

    let manifest = ctx.take_manifest()?;
    let categories = manifest
        .iter()
        .map(|(name, files)| (name.to_string(), files.len()))
        .collect();

    let existing = std::fs::read_to_string(&output_path).ok();
    let year = match (opts.year, opts.mode, &existing) {
        (Some(year), _, _) => year,
        // A stale check should not fail just because the calendar moved on
        (None, GenerateMode::Check, Some(text)) => {
            Header::find_year(text).unwrap_or_else(Header::current_year)
        }
        _ => Header::current_year(),
    };
    let header = Header::from_config(&config.output, year);
    let content = render(format, &manifest, &header)?;

    let result = match opts.mode {
        GenerateMode::Write => {
            write_artifact(&output_path, &content)?;
            GenerationResult::Written
        }
        GenerateMode::DryRun => GenerationResult::Preview(content),
        GenerateMode::Check => {
            let up_to_date = File::new(&output_path, content).is_current();
            tracing::info!(path = %output_path.display(), up_to_date, "checked artifact");
            GenerationResult::Checked { up_to_date }
        }
    };

    Ok(GenerateReport {
        output_path,
        format,
        year,
        warnings,
        categories,
        snapshot_dir: opts.dump_phases.map(Path::to_path_buf),
        result,
    })
}
