//! `credvault list` — display stored passwords in a table.

use crate::cli::output;
use crate::cli::{open_and_login, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli, show: bool) -> Result<()> {
    let (vault, session) = open_and_login(cli)?;

    let entries = vault.list_credentials(&session)?;

    output::info(&format!("{} stored password(s)", entries.len()));
    output::print_credentials_table(&entries, show);

    Ok(())
}
