//! `credvault export` — dump stored passwords as CSV or JSON.
//!
//! The export contains every password in clear text.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::cli::output;
use crate::cli::{open_and_login, Cli};
use crate::errors::{CredVaultError, Result};
use crate::export::{render, ExportFormat};

/// Execute the `export` command.
pub fn execute(cli: &Cli, format: &str, output_path: Option<&str>) -> Result<()> {
    let format: ExportFormat = format.parse()?;

    let (vault, session) = open_and_login(cli)?;
    let entries = vault.list_credentials(&session)?;
    let content = render(&entries, format)?;

    // Write to file or stdout.
    match output_path {
        Some(dest) => {
            let dest_path = Path::new(dest);

            // Safety: refuse to overwrite the vault itself.
            if vault
                .db_path()
                .is_some_and(|db| same_file(db, dest_path))
            {
                return Err(CredVaultError::CommandFailed(
                    "refusing to export over the vault database".into(),
                ));
            }

            write_private(dest_path, content.as_bytes()).map_err(|e| {
                CredVaultError::CommandFailed(format!("failed to write export file: {e}"))
            })?;

            output::success(&format!(
                "Exported {} passwords to {dest}",
                entries.len()
            ));
            output::warning("The export file contains passwords in clear text.");
        }
        None => {
            // Write to stdout (no success message, just raw output).
            print!("{content}");
        }
    }

    Ok(())
}

/// Write `content` to `path`, owner-only on Unix before any byte lands.
fn write_private(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;

    // `mode` only applies to newly created files.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(content)?;
    file.sync_all()
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn same_file_resolves_relative_segments() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("vault.db");
        fs::write(&file, b"x").unwrap();

        let indirect = dir.path().join(".").join("vault.db");
        assert!(same_file(&file, &indirect));
    }

    #[cfg(unix)]
    #[test]
    fn write_private_creates_owner_only_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let file = dir.path().join("export.csv");
        write_private(&file, b"id,service,secret\r\n").unwrap();

        let mode = fs::metadata(&file).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(fs::read(&file).unwrap(), b"id,service,secret\r\n");
    }

    #[cfg(unix)]
    #[test]
    fn write_private_tightens_existing_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let file = dir.path().join("export.csv");
        fs::write(&file, b"stale content that is longer").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o644)).unwrap();

        write_private(&file, b"fresh").unwrap();

        let mode = fs::metadata(&file).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(fs::read(&file).unwrap(), b"fresh");
    }

    #[test]
    fn same_file_false_for_missing_target() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("vault.db");
        fs::write(&file, b"x").unwrap();
        assert!(!same_file(&file, &dir.path().join("export.csv")));
    }
}
