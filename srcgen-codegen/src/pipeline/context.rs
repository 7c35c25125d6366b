//! Compilation context passed through pipeline phases.

use std::{collections::BTreeSet, path::PathBuf};

use eyre::Result;
use indexmap::IndexMap;
use srcgen_config::Config;
use srcgen_core::{Enumerator, FilePath};

use super::diagnostic::{Diagnostic, Severity};
use crate::{Manifest, categorize::CategoryMatches};

/// Context passed through all pipeline phases.
///
/// This struct carries the state of one run through each phase,
/// accumulating results and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The configuration being evaluated.
    pub config: Config,
    /// Directory every pattern is resolved against.
    pub root: PathBuf,
    /// Category names in evaluation order (populated by ResolvePhase).
    pub order: Option<Vec<String>>,
    /// Raw matches per category in configuration order (populated by EnumeratePhase).
    pub matches: Option<IndexMap<String, CategoryMatches>>,
    /// Final file sets (populated by CategorizePhase).
    pub manifest: Option<Manifest>,
    /// Diagnostics collected during the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new context for a configuration and source root.
    pub fn new(config: Config, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root: root.into(),
            order: None,
            matches: None,
            manifest: None,
            diagnostics: Vec::new(),
        }
    }

    /// An enumerator rooted at the source root.
    pub fn enumerator(&self) -> Enumerator {
        Enumerator::new(&self.root)
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a fully built diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Number of files per category, once categorization has run.
    pub fn category_counts(&self) -> Option<IndexMap<String, usize>> {
        self.manifest.as_ref().map(|manifest| {
            manifest
                .iter()
                .map(|(name, files)| (name.to_string(), files.len()))
                .collect()
        })
    }

    /// Files matched by a category's own patterns, once enumeration has run.
    pub fn raw_matches(&self, category: &str) -> Option<&BTreeSet<FilePath>> {
        self.matches
            .as_ref()
            .and_then(|m| m.get(category))
            .map(|m| &m.matched)
    }

    /// Take the manifest out of the context, consuming it.
    pub fn take_manifest(&mut self) -> Result<Manifest> {
        self.manifest
            .take()
            .ok_or_else(|| eyre::eyre!("manifest not set - did CategorizePhase run?"))
    }
}
