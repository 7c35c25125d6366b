use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use srcgen_config::{DEFAULT_CONFIG_FILE, STARTER_CONFIG};
use srcgen_core::{File, FileRules, WriteResult};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create sources.toml in (defaults to current directory)
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing sources.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = self.dir.join(DEFAULT_CONFIG_FILE);

        let mut file = File::new(&path, STARTER_CONFIG);
        if !self.force {
            file = file.with_rules(FileRules::create_only());
        }

        match file.write()? {
            WriteResult::Written => {
                println!("Created {}", path.display());
                println!();
                println!("Next steps:");
                println!("  srcgen check -c {}", path.display());
                println!("  srcgen generate -c {}", path.display());
                Ok(())
            }
            WriteResult::Skipped => bail!(
                "{} already exists; pass --force to overwrite it",
                path.display()
            ),
        }
    }
}
