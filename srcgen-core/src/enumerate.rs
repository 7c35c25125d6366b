//! Glob-based enumeration of source files under a base directory.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::{MatchOptions, Pattern};
use thiserror::Error;

use crate::path::{FilePath, RelativePathError};

/// Errors raised while enumerating source files.
#[derive(Debug, Error)]
pub enum EnumerateError {
    #[error("invalid glob pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("pattern '{pattern}' must be relative to the source root")]
    NotRelative { pattern: String },

    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path '{}' is not valid UTF-8", path.display())]
    NonUtf8 { path: PathBuf },

    #[error("matched path '{}' is not under '{}'", path.display(), base.display())]
    OutsideBase { path: PathBuf, base: PathBuf },
}

/// Match options shared by every enumeration.
///
/// `*` never crosses a directory boundary and never matches a leading dot.
pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Check whether a pattern stays inside the directory it is applied to.
///
/// Absolute patterns, drive-prefixed patterns and patterns with a `..`
/// component are rejected.
pub fn is_relative_pattern(pattern: &str) -> bool {
    if pattern.starts_with('/') || pattern.starts_with('\\') {
        return false;
    }
    let bytes = pattern.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        return false;
    }
    !pattern.split(['/', '\\']).any(|part| part == "..")
}

/// Enumerates files matching glob patterns relative to a base directory.
///
/// Every result is relative to the base directory and uses `/` separators.
/// A missing base directory behaves like a directory with no matches.
#[derive(Debug, Clone)]
pub struct Enumerator {
    base: PathBuf,
}

impl Enumerator {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The directory patterns are resolved against.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Return the set of regular files matching `pattern`.
    ///
    /// Supports `*`, `?`, `[...]` and recursive `**`. Directories that match
    /// the pattern are skipped.
    pub fn enumerate(&self, pattern: &str) -> Result<BTreeSet<FilePath>, EnumerateError> {
        Pattern::new(pattern).map_err(|source| EnumerateError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        if !is_relative_pattern(pattern) {
            return Err(EnumerateError::NotRelative {
                pattern: pattern.to_string(),
            });
        }

        let mut files = BTreeSet::new();
        if !self.base.is_dir() {
            tracing::debug!(base = %self.base.display(), pattern, "base directory missing");
            return Ok(files);
        }

        let base = self.base.to_str().ok_or_else(|| EnumerateError::NonUtf8 {
            path: self.base.clone(),
        })?;
        let full = format!("{}/{}", Pattern::escape(base), pattern);

        let entries = glob::glob_with(&full, MATCH_OPTIONS).map_err(|source| {
            EnumerateError::Pattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;

        for entry in entries {
            let path = entry.map_err(|e| EnumerateError::Io {
                path: e.path().to_path_buf(),
                source: std::io::Error::new(e.error().kind(), e.error().to_string()),
            })?;
            if !path.is_file() {
                continue;
            }
            let file = FilePath::relative_to(&path, &self.base).map_err(|err| match err {
                RelativePathError::NonUtf8 => EnumerateError::NonUtf8 { path: path.clone() },
                RelativePathError::OutsideBase => EnumerateError::OutsideBase {
                    path: path.clone(),
                    base: self.base.clone(),
                },
            })?;
            files.insert(file);
        }

        tracing::debug!(pattern, matched = files.len(), "enumerated pattern");
        Ok(files)
    }

    /// Return the union of the matches of every pattern.
    pub fn enumerate_all<'a, I>(&self, patterns: I) -> Result<BTreeSet<FilePath>, EnumerateError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut files = BTreeSet::new();
        for pattern in patterns {
            files.extend(self.enumerate(pattern)?);
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn names(set: &BTreeSet<FilePath>) -> Vec<&str> {
        set.iter().map(FilePath::as_str).collect()
    }

    #[test]
    fn test_enumerate_single_level() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/a.c");
        touch(temp.path(), "src/b.c");
        touch(temp.path(), "src/b.h");
        touch(temp.path(), "src/x86/c.c");

        let found = Enumerator::new(temp.path()).enumerate("src/*.c").unwrap();

        assert_eq!(names(&found), ["src/a.c", "src/b.c"]);
    }

    #[test]
    fn test_enumerate_recursive() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/a.c");
        touch(temp.path(), "src/x86/c.c");
        touch(temp.path(), "src/arm/64/d.c");

        let found = Enumerator::new(temp.path()).enumerate("src/**/*.c").unwrap();

        assert_eq!(names(&found), ["src/a.c", "src/arm/64/d.c", "src/x86/c.c"]);
    }

    #[test]
    fn test_enumerate_skips_directories() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/a.c");
        fs::create_dir_all(temp.path().join("src/weird.c")).unwrap();

        let found = Enumerator::new(temp.path()).enumerate("src/*.c").unwrap();

        assert_eq!(names(&found), ["src/a.c"]);
    }

    #[test]
    fn test_enumerate_skips_hidden_files() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/a.c");
        touch(temp.path(), "src/.hidden.c");

        let found = Enumerator::new(temp.path()).enumerate("src/*.c").unwrap();

        assert_eq!(names(&found), ["src/a.c"]);
    }

    #[test]
    fn test_enumerate_no_matches_is_empty() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/a.c");

        let found = Enumerator::new(temp.path()).enumerate("src/*.asm").unwrap();

        assert!(found.is_empty());
    }

    #[test]
    fn test_enumerate_missing_base_is_empty() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");

        let found = Enumerator::new(missing).enumerate("*.c").unwrap();

        assert!(found.is_empty());
    }

    #[test]
    fn test_enumerate_base_with_glob_characters() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("tree [v1]");
        touch(&base, "src/a.c");

        let found = Enumerator::new(&base).enumerate("src/*.c").unwrap();

        assert_eq!(names(&found), ["src/a.c"]);
    }

    #[test]
    fn test_enumerate_relative_base() {
        // Tests run from the crate directory
        let expected = ["src/enumerate.rs", "src/file.rs", "src/lib.rs", "src/path.rs"];

        for base in [".", "./."] {
            let found = Enumerator::new(base).enumerate("src/*.rs").unwrap();
            assert_eq!(names(&found), expected, "base {:?}", base);
        }

        let found = Enumerator::new("./src").enumerate("*.rs").unwrap();
        assert_eq!(names(&found), ["enumerate.rs", "file.rs", "lib.rs", "path.rs"]);
    }

    #[test]
    fn test_enumerate_inner_dot_component_is_canonical() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/a.c");

        let found = Enumerator::new(temp.path()).enumerate("src/./*.c").unwrap();

        assert_eq!(names(&found), ["src/a.c"]);
        assert!(found.contains(&FilePath::new("src/a.c")));
    }

    #[test]
    fn test_outside_base_error_names_both_paths() {
        let err = EnumerateError::OutsideBase {
            path: PathBuf::from("other/a.c"),
            base: PathBuf::from("tree"),
        };

        assert_eq!(err.to_string(), "matched path 'other/a.c' is not under 'tree'");
    }

    #[test]
    fn test_enumerate_invalid_pattern() {
        let temp = TempDir::new().unwrap();

        let err = Enumerator::new(temp.path()).enumerate("src/[.c").unwrap_err();

        assert!(matches!(err, EnumerateError::Pattern { .. }));
    }

    #[test]
    fn test_enumerate_rejects_escaping_pattern() {
        let temp = TempDir::new().unwrap();

        let err = Enumerator::new(temp.path()).enumerate("../*.c").unwrap_err();

        assert!(matches!(err, EnumerateError::NotRelative { .. }));
    }

    #[test]
    fn test_enumerate_all_unions_patterns() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "src/a.c");
        touch(temp.path(), "src/b.S");
        touch(temp.path(), "src/c.asm");

        let found = Enumerator::new(temp.path())
            .enumerate_all(["src/*.S", "src/*.asm", "src/*.S"])
            .unwrap();

        assert_eq!(names(&found), ["src/b.S", "src/c.asm"]);
    }

    #[test]
    fn test_is_relative_pattern() {
        assert!(is_relative_pattern("libdav1d/src/*.c"));
        assert!(is_relative_pattern("src/**/*.h"));
        assert!(!is_relative_pattern("/usr/include/*.h"));
        assert!(!is_relative_pattern(r"C:\src\*.c"));
        assert!(!is_relative_pattern("src/../../*.c"));
        assert!(is_relative_pattern("src/..hidden/*.c"));
    }
}
