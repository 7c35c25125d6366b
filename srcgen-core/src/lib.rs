//! Core utilities and types for the srcgen source-list generator.
//!
//! This crate provides the path and filesystem primitives shared by
//! the rest of the workspace.

mod enumerate;
mod file;
mod path;

// Source enumeration
pub use enumerate::{EnumerateError, Enumerator, MATCH_OPTIONS, is_relative_pattern};
// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
// Paths
pub use path::{FilePath, RelativePathError, normalize_separators};
