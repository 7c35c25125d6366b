//! Category definitions.

use serde::{Deserialize, Serialize};

/// A `[[category]]` entry.
///
/// A file belongs to the category when it matches one of `patterns` and is
/// not removed by one of the exclusions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryDef {
    /// Variable name emitted in the artifact.
    pub name: String,

    /// Optional human description, shown by `srcgen list`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Glob patterns relative to the source root.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Literal paths to drop, relative to the source root.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Glob patterns whose matches are dropped.
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Categories whose final file sets are dropped.
    #[serde(default)]
    pub exclude_categories: Vec<String>,
}

/// One entry of a category's exclusion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion<'a> {
    /// A literal path.
    Path(&'a str),
    /// Every file matching a pattern.
    Pattern(&'a str),
    /// The final file set of another category.
    Category(&'a str),
}

impl CategoryDef {
    /// Create a category matching the given patterns with no exclusions.
    pub fn new<I, S>(name: impl Into<String>, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Add literal path exclusions.
    pub fn excluding<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add pattern exclusions.
    pub fn excluding_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Add category exclusions.
    pub fn excluding_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_categories
            .extend(categories.into_iter().map(Into::into));
        self
    }

    /// All exclusions in declaration order: paths, then patterns, then categories.
    pub fn exclusions(&self) -> impl Iterator<Item = Exclusion<'_>> {
        self.exclude
            .iter()
            .map(|p| Exclusion::Path(p))
            .chain(self.exclude_patterns.iter().map(|p| Exclusion::Pattern(p)))
            .chain(self.exclude_categories.iter().map(|c| Exclusion::Category(c)))
    }

    /// Check whether this category subtracts `other`'s file set.
    pub fn excludes_category(&self, other: &str) -> bool {
        self.exclude_categories.iter().any(|c| c == other)
    }
}
