//! `credvault status` — show which database is in use.

use crate::cli::output;
use crate::cli::{open_vault, Cli};
use crate::errors::Result;

/// Execute the `status` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let vault = open_vault(cli)?;

    if let Some(path) = vault.db_path() {
        output::info(&format!("Database: {}", path.display()));
    }

    if vault.is_initialized()? {
        output::success("Master password is set.");
    } else {
        output::warning("No master password yet.");
        output::tip("Run `credvault init` to create one.");
    }

    Ok(())
}
