//! `credvault db` — switch to another database file and remember it.

use std::path::Path;

use crate::cli::output;
use crate::cli::{config_dir, open_vault, Cli};
use crate::config::Settings;
use crate::errors::Result;

/// Execute the `db` command.
pub fn execute(cli: &Cli, path: &str) -> Result<()> {
    let dir = config_dir()?;
    let mut vault = open_vault(cli)?;

    // Open the new location first; on failure nothing is persisted.
    let target = dir.join(Path::new(path));
    vault.reopen(&target)?;

    let mut settings = Settings::load(&dir)?;
    settings.db_path = path.to_string();
    settings.save(&dir)?;

    output::success(&format!("Now using {}", target.display()));
    if !vault.is_initialized()? {
        output::tip("This database is new — run `credvault init` to set its master password.");
    }

    Ok(())
}
