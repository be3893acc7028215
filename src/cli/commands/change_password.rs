//! `credvault change-password` — rotate the master password.

use crate::cli::output;
use crate::cli::{open_vault, prompt_new_password, prompt_password, Cli};
use crate::errors::Result;

/// Environment variable holding the new password for scripted rotation.
pub const NEW_PASSWORD_ENV: &str = "CREDVAULT_NEW_PASSWORD";

/// Execute the `change-password` command.
pub fn execute(cli: &Cli) -> Result<()> {
    // 1. Log in with the current password.
    output::info("Enter your current master password.");
    let vault = open_vault(cli)?;
    let current = prompt_password("Current master password")?;
    let session = vault.login(&current)?;

    // 2. Prompt for the new password.
    output::info("Choose your new master password.");
    let new = prompt_new_password(NEW_PASSWORD_ENV)?;

    // 3. Re-check the current password and replace the hash atomically.
    vault.change_master_passphrase(&session, &current, &new)?;

    output::success("Master password changed.");
    Ok(())
}
