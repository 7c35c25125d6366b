//! Output formats for the generated artifact.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported artifact formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// GN include file (`.gni`)
    #[default]
    Gn,
    /// JSON document
    Json,
}

impl OutputFormat {
    /// Returns the format identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Gn => "gn",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gn" | "gni" => Ok(OutputFormat::Gn),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown format '{}', expected 'gn' or 'json'", s)),
        }
    }
}
