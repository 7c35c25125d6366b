//! Generate command report data structures.

use std::path::PathBuf;

use srcgen_config::OutputFormat;

use super::output::{Output, Report};

/// Report data from artifact generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Artifact path.
    pub output_path: PathBuf,
    /// Artifact format.
    pub format: OutputFormat,
    /// Year in the copyright line.
    pub year: i32,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// File count per category, in emission order.
    pub categories: Vec<(String, usize)>,
    /// Path to phase snapshots, if they were requested.
    pub snapshot_dir: Option<PathBuf>,
    /// What happened to the artifact.
    pub result: GenerationResult,
}

/// Outcome of a generate run.
#[derive(Debug)]
pub enum GenerationResult {
    /// The artifact was written to disk.
    Written,
    /// Dry-run: the rendered artifact.
    Preview(String),
    /// Comparison with the artifact on disk.
    Checked { up_to_date: bool },
}

impl GenerateReport {
    /// Whether the run should exit with failure.
    pub fn is_stale(&self) -> bool {
        matches!(self.result, GenerationResult::Checked { up_to_date: false })
    }

    fn total_files(&self) -> usize {
        self.categories.iter().map(|(_, count)| count).sum()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if let Some(dir) = &self.snapshot_dir {
            out.key_value("Pipeline snapshots written to", &dir.display().to_string());
        }

        let path = self.output_path.display().to_string();
        match &self.result {
            GenerationResult::Preview(content) => {
                out.divider(&path);
                out.raw(content);
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} categories, {} files would be written as {}",
                    self.categories.len(),
                    self.total_files(),
                    self.format
                ));
            }
            GenerationResult::Written => {
                out.key_value("Generated", &path);
                out.preformatted(&format!(
                    "  {} categories, {} files ({}, {})",
                    self.categories.len(),
                    self.total_files(),
                    self.format,
                    self.year
                ));
            }
            GenerationResult::Checked { up_to_date: true } => {
                out.preformatted(&format!("✓ {} is up to date", path));
            }
            GenerationResult::Checked { up_to_date: false } => {
                out.error(&format!(
                    "{} is out of date; run `srcgen generate` to update it",
                    path
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::testing::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            output_path: "out/dav1d_generated.gni".into(),
            format: OutputFormat::Gn,
            year: 2030,
            warnings: vec!["categories 'a' and 'b' both list 1 file(s)".into()],
            categories: vec![("c_sources".into(), 3), ("templates".into(), 2)],
            snapshot_dir: None,
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Written).render(&mut out);

        insta::assert_snapshot!(out.text(), @r"
        warning: categories 'a' and 'b' both list 1 file(s)
        Generated: out/dav1d_generated.gni
          2 categories, 5 files (gn, 2030)
        ");
    }

    #[test]
    fn test_render_preview() {
        let mut out = RecordingOutput::default();
        let mut report = report(GenerationResult::Preview("c_sources = []\n".into()));
        report.warnings.clear();
        report.render(&mut out);

        insta::assert_snapshot!(out.text(), @r"
        ── out/dav1d_generated.gni ──
        c_sources = []
        ── Summary ──
        2 categories, 5 files would be written as gn
        ");
    }

    #[test]
    fn test_stale() {
        assert!(report(GenerationResult::Checked { up_to_date: false }).is_stale());
        assert!(!report(GenerationResult::Checked { up_to_date: true }).is_stale());
        assert!(!report(GenerationResult::Written).is_stale());
    }
}
