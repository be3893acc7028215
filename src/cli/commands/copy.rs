//! `credvault copy` — put a stored password on the clipboard.

use crate::cli::output;
use crate::cli::{open_and_login, Cli};
use crate::errors::{CredVaultError, Result};

/// Execute the `copy` command.
pub fn execute(cli: &Cli, id: i64) -> Result<()> {
    let (vault, session) = open_and_login(cli)?;
    let entry = vault.get_credential(&session, id)?;

    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| CredVaultError::ClipboardError(e.to_string()))?;
    clipboard
        .set_text(entry.secret.as_str())
        .map_err(|e| CredVaultError::ClipboardError(e.to_string()))?;

    output::success(&format!("Copied password for '{}'", entry.service));
    Ok(())
}
