//! Pipeline snapshot plugin for debugging.
//!
//! Captures the pipeline state after each phase so the intermediate results
//! of a run can be inspected.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use eyre::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};

/// File counts of one category at the time of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    /// Files matched by the category's own patterns.
    pub matched: usize,
    /// Files matched by the category's exclusion patterns.
    pub pattern_excluded: usize,
    /// Files left after exclusions (available after "categorize").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

/// A snapshot of the pipeline state at a specific phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    /// The phase that just completed.
    pub phase: String,

    /// Evaluation order (available after "resolve").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<String>>,

    /// Per-category counts (available after "enumerate").
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub categories: IndexMap<String, CategoryCounts>,

    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

impl PhaseSnapshot {
    fn capture(phase: &str, ctx: &CompilationContext) -> Self {
        let mut categories = IndexMap::new();
        if let Some(matches) = &ctx.matches {
            for (name, m) in matches {
                let total = ctx
                    .manifest
                    .as_ref()
                    .and_then(|manifest| manifest.get(name))
                    .map(|files| files.len());
                categories.insert(
                    name.clone(),
                    CategoryCounts {
                        matched: m.matched.len(),
                        pattern_excluded: m.pattern_excluded.len(),
                        total,
                    },
                );
            }
        }

        Self {
            phase: phase.to_string(),
            order: ctx.order.clone(),
            categories,
            diagnostics: ctx.diagnostics.clone(),
        }
    }

    fn write(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create '{}'", dir.display()))?;
        let path = dir.join(format!("{}.json", self.phase));
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        fs::write(&path, json).wrap_err_with(|| format!("failed to write '{}'", path.display()))
    }
}

/// A plugin that captures pipeline state after each phase.
///
/// Used by `generate --dump-phases <dir>` to leave one JSON file per phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(SnapshotPlugin::with_output_dir("debug"));
/// let ctx = pipeline.run(config, root)?;
/// // debug/validate.json, debug/resolve.json, ...
/// ```
pub struct SnapshotPlugin {
    /// Collected snapshots.
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    /// Output directory for snapshots.
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    /// Create a new snapshot plugin that only keeps snapshots in memory.
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    /// Create a new snapshot plugin that writes each snapshot to a directory.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// Get all collected snapshots.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Write all snapshots to a directory.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        let snapshots = self.snapshots.read().unwrap_or_else(PoisonError::into_inner);
        for snapshot in snapshots.iter() {
            snapshot.write(dir.as_ref())?;
        }
        Ok(())
    }
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = PhaseSnapshot::capture(phase, ctx);

        if let Some(dir) = &self.output_dir {
            snapshot.write(dir)?;
            tracing::debug!(phase, dir = %dir.display(), "wrote phase snapshot");
        }

        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
        Ok(())
    }
}
