use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use srcgen_config::{CategoryDef, ConfigFile, DEFAULT_CONFIG_FILE, Exclusion};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to sources.toml (defaults to ./sources.toml)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

/// One line per pattern and exclusion, indented under the category name.
fn describe(category: &CategoryDef) -> Vec<String> {
    let mut lines = vec![match &category.description {
        Some(desc) => format!("{} - {}", category.name, desc),
        None => category.name.clone(),
    }];
    for pattern in &category.patterns {
        lines.push(format!("  + {}", pattern));
    }
    for exclusion in category.exclusions() {
        lines.push(match exclusion {
            Exclusion::Path(path) => format!("  - {}", path),
            Exclusion::Pattern(pattern) => format!("  - {} (pattern)", pattern),
            Exclusion::Category(name) => format!("  - [{}]", name),
        });
    }
    lines
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let file = ConfigFile::open(&self.config).unwrap_or_exit();
        let config = file.config();

        if config.categories.is_empty() {
            println!("No categories defined");
            return Ok(());
        }

        println!("Categories:");
        for category in &config.categories {
            for line in describe(category) {
                println!("  {}", line);
            }
        }
        println!();
        println!(
            "Output: {} ({})",
            file.output_path(None).display(),
            config.output.format
        );

        Ok(())
    }
}
