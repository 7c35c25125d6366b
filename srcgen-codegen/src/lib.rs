//! Categorization pipeline and artifact emitters for srcgen.
//!
//! This crate turns a parsed configuration and a source tree into an
//! ordered category-to-files [`Manifest`] and renders it as a build file.
//!
//! # Module Organization
//!
//! - [`pipeline`] - Phases, lints, diagnostics and plugins (Pipeline, SnapshotPlugin, etc.)
//! - [`resolve`] - Evaluation order of categories with exclusion dependencies
//! - [`categorize`] - Category membership and exclusion filtering
//! - [`emit`] - Header and emitters for the GN and JSON formats
//! - [`testing`] - Test utilities (feature-gated)

pub mod categorize;
pub mod emit;
mod manifest;
pub mod pipeline;
pub mod resolve;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use categorize::build_categories;
pub use manifest::Manifest;
