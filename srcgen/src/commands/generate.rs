use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use srcgen_config::{ConfigFile, DEFAULT_CONFIG_FILE, OutputFormat};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateMode, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to sources.toml (defaults to ./sources.toml)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Source root (overrides [source] root)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Artifact path (overrides [output] path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Year for the copyright line (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Artifact format (overrides [output] format)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Print the artifact instead of writing it
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Exit with an error if the artifact on disk is out of date
    #[arg(long)]
    pub check: bool,

    /// Write a JSON snapshot of every pipeline phase to this directory
    #[arg(long, value_name = "DIR")]
    pub dump_phases: Option<PathBuf>,
}

impl GenerateCommand {
    fn mode(&self) -> GenerateMode {
        if self.dry_run {
            GenerateMode::DryRun
        } else if self.check {
            GenerateMode::Check
        } else {
            GenerateMode::Write
        }
    }

    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = ConfigFile::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            &file,
            GenerateOptions {
                base_dir: self.base_dir.as_deref(),
                output: self.output.as_deref(),
                year: self.year,
                format: self.format,
                mode: self.mode(),
                dump_phases: self.dump_phases.as_deref(),
            },
        )?;

        report.render(&mut TerminalOutput::new());

        if report.is_stale() {
            std::process::exit(1);
        }
        Ok(())
    }
}
