//! `credvault delete` — remove a stored password.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{open_and_login, Cli};
use crate::errors::{CredVaultError, Result};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, id: i64, force: bool) -> Result<()> {
    let (vault, session) = open_and_login(cli)?;

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let service = match vault.get_credential(&session, id) {
            Ok(entry) => entry.service,
            Err(CredVaultError::CredentialNotFound(_)) => {
                nothing_to_delete(id);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete #{id} ({service})?"))
            .default(false)
            .interact()
            .map_err(|e| CredVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    if vault.delete_credential(&session, id)? {
        output::success(&format!("Deleted #{id}"));
    } else {
        nothing_to_delete(id);
    }

    Ok(())
}

fn nothing_to_delete(id: i64) {
    output::info(&format!("Nothing to delete — #{id} does not exist."));
}
