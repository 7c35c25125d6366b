use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use srcgen_config::{ConfigFile, DEFAULT_CONFIG_FILE};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to sources.toml (defaults to ./sources.toml)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Source root (overrides [source] root)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = ConfigFile::open(&self.config).unwrap_or_exit();

        let report = ops::check(&file, self.base_dir.as_deref());
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
