//! `credvault completions` — print a shell completion script.
//!
//!   credvault completions bash > ~/.local/share/bash-completion/completions/credvault
//!   credvault completions zsh > "${fpath[1]}/_credvault"

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::errors::{CredVaultError, Result};

/// Execute the `completions` command.
pub fn execute(shell: &str) -> Result<()> {
    let shell = parse_shell(shell)?;
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}

fn parse_shell(name: &str) -> Result<Shell> {
    let shell = match name.to_ascii_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "elvish" => Shell::Elvish,
        "powershell" | "pwsh" | "ps" => Shell::PowerShell,
        other => {
            return Err(CredVaultError::InvalidInput(format!(
                "unknown shell '{other}' — supported: bash, zsh, fish, elvish, powershell"
            )))
        }
    };
    Ok(shell)
}
