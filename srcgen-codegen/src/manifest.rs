//! The ordered category-to-files mapping produced by one run.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;
use srcgen_core::FilePath;

/// Final file sets keyed by category name.
///
/// Categories keep the order they were inserted in, which is the
/// configuration order. Files within a category are always sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    categories: IndexMap<String, BTreeSet<FilePath>>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category, or replace the files of an existing one in place.
    pub fn insert(&mut self, name: impl Into<String>, files: BTreeSet<FilePath>) {
        self.categories.insert(name.into(), files);
    }

    /// Files of a category, if it exists.
    pub fn get(&self, name: &str) -> Option<&BTreeSet<FilePath>> {
        self.categories.get(name)
    }

    /// Iterate categories in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<FilePath>)> {
        self.categories
            .iter()
            .map(|(name, files)| (name.as_str(), files))
    }

    /// Category names in emission order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of file entries across all categories.
    pub fn total_files(&self) -> usize {
        self.categories.values().map(BTreeSet::len).sum()
    }
}
