//! Check command report data structures.

use std::path::PathBuf;

use indexmap::IndexMap;

use super::output::{Output, Report};

/// Report data from configuration validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Source root the patterns were matched against.
    pub root: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// File count per category; empty when categorization did not finish.
    pub categories: IndexMap<String, usize>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value("Source root", &self.root.display().to_string());
        out.section(&format!("Categories ({})", self.categories.len()));
        let width = self.categories.keys().map(String::len).max().unwrap_or(0);
        for (name, count) in &self.categories {
            out.list_item(&format!(
                "{:width$}  {} file{}",
                name,
                count,
                if *count == 1 { "" } else { "s" },
                width = width
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::testing::RecordingOutput;

    #[test]
    fn test_render_valid() {
        let report = CheckReport {
            config_path: "sources.toml".into(),
            root: "third_party/dav1d".into(),
            errors: Vec::new(),
            warnings: Vec::new(),
            infos: vec!["category 'arm_template_sources' matched no files".into()],
            categories: IndexMap::from([
                ("arm_template_sources".to_string(), 0),
                ("c_sources".to_string(), 1),
                ("c_headers".to_string(), 12),
            ]),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        insta::assert_snapshot!(out.text(), @r"
        info: category 'arm_template_sources' matched no files

        ✓ sources.toml is valid

        Source root: third_party/dav1d
        Categories (3):
          - arm_template_sources  0 files
          - c_sources             1 file
          - c_headers             12 files
        ");
    }

    #[test]
    fn test_render_errors_only() {
        let report = CheckReport {
            config_path: "sources.toml".into(),
            root: ".".into(),
            errors: vec!["exclusion cycle between categories: a -> b -> a".into()],
            warnings: Vec::new(),
            infos: Vec::new(),
            categories: IndexMap::new(),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(!report.is_valid());
        assert_eq!(
            out.lines,
            [
                "error: exclusion cycle between categories: a -> b -> a",
                ""
            ]
        );
    }
}
