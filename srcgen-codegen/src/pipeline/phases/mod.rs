//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`ValidatePhase`] - runs lints on the configuration
//! - [`ResolvePhase`] - orders categories by exclusion dependencies
//! - [`EnumeratePhase`] - globs each category's patterns
//! - [`CategorizePhase`] - applies exclusions and builds the manifest
//! - [`AnalyzePhase`] - reports overlaps and empty categories

mod analyze;
mod categorize;
mod enumerate;
mod resolve;
mod validate;

pub use analyze::AnalyzePhase;
pub use categorize::CategorizePhase;
pub use enumerate::EnumeratePhase;
pub use resolve::ResolvePhase;
pub use validate::{
    CategoryPatternsLint, GlobSyntaxLint, Lint, LintInfo, RedundantExclusionLint,
    RelativePatternLint, ValidatePhase,
};
