use std::path::{Path, PathBuf};

use super::Config;
use crate::Result;

/// Represents a sources.toml file with both raw content and parsed config.
///
/// Relative paths inside the config are resolved against the directory the
/// file lives in, not the process working directory.
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a sources.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory containing the config file.
    pub fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }

    /// Resolve the source root, preferring an explicit override.
    ///
    /// The override is taken as given; the configured root is relative to
    /// the config file directory.
    pub fn source_root(&self, override_root: Option<&Path>) -> PathBuf {
        match override_root {
            Some(root) => root.to_path_buf(),
            None => self.dir().join(&self.config.source.root),
        }
    }

    /// Resolve the artifact path, preferring an explicit override.
    pub fn output_path(&self, override_path: Option<&Path>) -> PathBuf {
        match override_path {
            Some(path) => path.to_path_buf(),
            None => self.dir().join(&self.config.output.path),
        }
    }
}
