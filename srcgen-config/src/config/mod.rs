//! Configuration types and parsing for sources.toml files.

mod category;
mod file;
mod format;
mod parse;
mod validate;

use std::path::PathBuf;

pub use category::{CategoryDef, Exclusion};
pub use file::ConfigFile;
pub use format::OutputFormat;
use serde::{Deserialize, Serialize};
pub use validate::ParseContext;

/// Default file name of the configuration.
pub const DEFAULT_CONFIG_FILE: &str = "sources.toml";

/// Root configuration for sources.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where and how the artifact is written
    #[serde(default)]
    pub output: OutputConfig,

    /// Source tree the patterns are resolved against
    #[serde(default)]
    pub source: SourceConfig,

    /// Categories in emission order
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryDef>,
}

impl Config {
    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Option<&CategoryDef> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Check if a category exists.
    pub fn has_category(&self, name: &str) -> bool {
        self.category(name).is_some()
    }

    /// Category names in emission order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}

/// `[output]` table.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Artifact path, relative to the config file directory.
    pub path: PathBuf,
    /// Artifact format.
    pub format: OutputFormat,
    /// Name of the generator mentioned in the "do not edit" note.
    pub generator: String,
    /// Holder named on the copyright line.
    pub copyright_holder: String,
    /// License reference lines following the copyright line.
    pub license: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("sources_generated.gni"),
            format: OutputFormat::default(),
            generator: "srcgen".to_string(),
            copyright_holder: "The Chromium Authors".to_string(),
            license: vec![
                "Use of this source code is governed by a BSD-style license that can be"
                    .to_string(),
                "found in the LICENSE file.".to_string(),
            ],
        }
    }
}

/// `[source]` table.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// Source root, relative to the config file directory.
    pub root: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}
