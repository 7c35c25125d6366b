//! Header block shared by all artifact formats.

use chrono::Datelike;
use serde::Serialize;
use srcgen_config::OutputConfig;

/// Copyright and "do not edit" notice placed at the top of the artifact.
///
/// The year is the only part that changes between runs on an unchanged tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub year: i32,
    pub copyright_holder: String,
    pub license: Vec<String>,
    pub generator: String,
}

impl Header {
    /// Build the header from the `[output]` table for the given year.
    pub fn from_config(output: &OutputConfig, year: i32) -> Self {
        Self {
            year,
            copyright_holder: output.copyright_holder.clone(),
            license: output.license.clone(),
            generator: output.generator.clone(),
        }
    }

    /// The current calendar year in local time.
    pub fn current_year() -> i32 {
        chrono::Local::now().year()
    }

    /// Recover the year from an artifact rendered earlier, in either format.
    pub fn find_year(text: &str) -> Option<i32> {
        ["Copyright ", "\"year\": "].into_iter().find_map(|marker| {
            let start = text.find(marker)? + marker.len();
            let digits: String = text[start..]
                .chars()
                .take_while(char::is_ascii_digit)
                .collect();
            digits.parse().ok()
        })
    }

    pub fn copyright_line(&self) -> String {
        format!("Copyright {} {}", self.year, self.copyright_holder)
    }

    pub fn notice(&self) -> String {
        format!(
            "NOTE: this file is autogenerated by {} - DO NOT EDIT.",
            self.generator
        )
    }
}
