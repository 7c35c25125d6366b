//! Test utilities for source trees and artifacts.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{fs, path::Path};

use eyre::{Context, Result};
use tempfile::TempDir;

/// A throwaway source tree that is deleted when dropped.
///
/// ```ignore
/// let tree = SourceTree::with_files(["src/a.c", "src/b.h"])?;
/// let ctx = Pipeline::new().run(config, tree.path())?;
/// ```
pub struct SourceTree {
    dir: TempDir,
}

impl SourceTree {
    /// Create an empty tree.
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new().wrap_err("failed to create temporary source tree")?,
        })
    }

    /// Create a tree holding empty files at the given relative paths.
    pub fn with_files<I, S>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tree = Self::new()?;
        for path in paths {
            tree.touch(path.as_ref())?;
        }
        Ok(tree)
    }

    /// Root directory of the tree.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create an empty file, along with its parent directories.
    pub fn touch(&self, rel: &str) -> Result<()> {
        self.write(rel, "")
    }

    /// Create a file with content, along with its parent directories.
    pub fn write(&self, rel: &str, content: &str) -> Result<()> {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
        }
        fs::write(&path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))
    }

    /// Create an empty directory.
    pub fn mkdir(&self, rel: &str) -> Result<()> {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(&path).wrap_err_with(|| format!("failed to create '{}'", path.display()))
    }
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }
        if diff.is_empty() {
            diff.push_str("  (line endings or trailing newline differ)\n");
        }

        panic!("Content mismatch:\n{}", diff);
    }
}
