//! `credvault init` — create the master password for a new vault.

use crate::cli::output;
use crate::cli::{open_vault, prompt_new_password, Cli, PASSWORD_ENV};
use crate::errors::{CredVaultError, Result};

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let vault = open_vault(cli)?;

    // 1. Refuse to overwrite an existing master password.
    if vault.is_initialized()? {
        output::tip("Use `credvault change-password` to rotate the master password.");
        return Err(CredVaultError::AlreadyInitialized);
    }

    // 2. Prompt for a new password (with confirmation).
    let password = prompt_new_password(PASSWORD_ENV)?;

    // 3. Hash and store it.
    vault.setup(&password)?;

    let location = vault
        .db_path()
        .map_or_else(|| "memory".to_string(), |p| p.display().to_string());
    output::success(&format!("Vault initialized at {location}"));

    output::tip("Run `credvault add <SERVICE>` to store a password.");
    output::tip("Run `credvault generate` to create a random password.");

    Ok(())
}
