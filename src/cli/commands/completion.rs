//! completion command - Generate shell completion scripts

use crate::cli::args::{Cli, Shell};
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, shells, Generator};

/// Generate shell completion scripts.
pub fn completion(shell: Shell) -> Result<()> {
    let mut stdout = std::io::stdout();
    match shell {
        Shell::Bash => write_completion(shells::Bash, &mut stdout),
        Shell::Zsh => write_completion(shells::Zsh, &mut stdout),
        Shell::Fish => write_completion(shells::Fish, &mut stdout),
        Shell::PowerShell => write_completion(shells::PowerShell, &mut stdout),
    }
    Ok(())
}

fn write_completion<G: Generator>(generator: G, out: &mut dyn std::io::Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(generator, &mut cmd, name, out);
}
