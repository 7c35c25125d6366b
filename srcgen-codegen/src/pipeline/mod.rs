//! Pipeline from configuration to manifest.
//!
//! This module provides a [`Pipeline`] orchestrator that runs the phases
//! between a parsed configuration and a finished [`Manifest`](crate::Manifest):
//!
//! - Explicit phase boundaries (validate → resolve → enumerate → categorize → analyze)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared state via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use srcgen_codegen::pipeline::{Pipeline, Severity};
//!
//! let mut ctx = Pipeline::new().run(config, "third_party/dav1d")?;
//!
//! for diag in &ctx.diagnostics {
//!     if matches!(diag.severity, Severity::Warning) {
//!         eprintln!("{}", diag);
//!     }
//! }
//!
//! let manifest = ctx.take_manifest()?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{CategoryCounts, PhaseSnapshot, SnapshotPlugin};
