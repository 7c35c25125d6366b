use std::{
    fmt,
    path::{Component, Path},
};

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Convert every path separator in `path` to a forward slash.
///
/// Both the host separator and `\` are rewritten, so the result never
/// contains a backslash. Applying this twice is the same as applying it once.
pub fn normalize_separators(path: &str) -> String {
    path.chars()
        .map(|c| {
            if c == '\\' || c == std::path::MAIN_SEPARATOR {
                '/'
            } else {
                c
            }
        })
        .collect()
}

/// Why a matched path could not be turned into a [`FilePath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RelativePathError {
    #[error("path is not inside the base directory")]
    OutsideBase,
    #[error("path is not valid UTF-8")]
    NonUtf8,
}

/// A file under the source root, relative and `/`-separated.
///
/// Ordering is plain byte-wise string ordering, which is what the emitted
/// lists are sorted by. There are no `.` segments, empty segments or
/// leading slashes, so one file has exactly one spelling.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilePath(String);

impl FilePath {
    /// Build a file path from an arbitrary relative path string.
    ///
    /// Separators are normalized, and `.` and empty segments are dropped,
    /// so `./src//a.c`, `/src/a.c` and `src/./a.c` all become `src/a.c`.
    pub fn new(path: impl AsRef<str>) -> Self {
        let normalized = normalize_separators(path.as_ref());
        let segments: Vec<&str> = normalized
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect();
        Self(segments.join("/"))
    }

    /// Build a file path from `path` relative to `base`.
    ///
    /// Both paths are compared component by component with `.` components
    /// ignored, so a base of `.` or `./.` accepts the bare relative paths
    /// glob hands back.
    pub fn relative_to(path: &Path, base: &Path) -> Result<Self, RelativePathError> {
        let mut rest = path.components().filter(|c| *c != Component::CurDir);
        for expected in base.components().filter(|c| *c != Component::CurDir) {
            if rest.next() != Some(expected) {
                return Err(RelativePathError::OutsideBase);
            }
        }

        let mut segments = Vec::new();
        for component in rest {
            match component {
                Component::Normal(part) => {
                    segments.push(part.to_str().ok_or(RelativePathError::NonUtf8)?);
                }
                _ => return Err(RelativePathError::OutsideBase),
            }
        }
        Ok(Self(segments.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FilePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for FilePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
