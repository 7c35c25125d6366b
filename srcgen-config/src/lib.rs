//! Configuration for the srcgen source-list generator.
//!
//! A `sources.toml` file names the source root, the artifact to write and
//! the ordered list of categories. Parsing rejects anything that would make
//! the artifact ill-formed (bad variable names, duplicates, references to
//! categories that do not exist) with errors pointing into the file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod starter;

pub use config::{
    CategoryDef, Config, ConfigFile, DEFAULT_CONFIG_FILE, Exclusion, OutputConfig, OutputFormat,
    ParseContext, SourceConfig,
};
pub use error::{Error, Result, SourceContext};
pub use starter::STARTER_CONFIG;
