use std::io::{self, Write};

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use eyre::Result;

use super::Cli;

/// Print a completion script, e.g. `srcgen completions zsh > _srcgen`.
#[derive(Args)]
pub struct CompletionsCommand {
    /// Target shell
    shell: Shell,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        write_completions(self.shell, &mut io::stdout().lock())
    }
}

fn write_completions(shell: Shell, out: &mut impl Write) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_cover_subcommands() {
        let mut buf = Vec::new();
        write_completions(Shell::Bash, &mut buf).unwrap();

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("_srcgen()"));
        for sub in ["generate", "check", "list", "init", "completions"] {
            assert!(script.contains(sub), "missing {}", sub);
        }
    }
}
