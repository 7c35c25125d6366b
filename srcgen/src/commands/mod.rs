mod check;
mod completions;
mod generate;
mod init;
mod list;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use list::ListCommand;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for srcgen_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "srcgen")]
#[command(version)]
#[command(about = "Generate deterministic source lists from glob-based categories")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug); SRCGEN_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the source list artifact from sources.toml
    Generate(GenerateCommand),

    /// Validate sources.toml and show category sizes without writing
    Check(CheckCommand),

    /// List the categories defined in sources.toml
    List(ListCommand),

    /// Write a starter sources.toml for the dav1d tree
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
