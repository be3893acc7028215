//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::CredentialEntry;

/// Longest mask shown for a hidden password.
const MAX_MASK_LEN: usize = 12;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Bullets standing in for a password, one per character up to 12.
pub fn mask(secret: &str) -> String {
    "\u{2022}".repeat(secret.chars().count().min(MAX_MASK_LEN))
}

/// Print a table of credentials (Id, Service, Password).
pub fn print_credentials_table(entries: &[CredentialEntry], show: bool) {
    if entries.is_empty() {
        info("No passwords stored yet.");
        tip("Run `credvault add <SERVICE>` to store your first password.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Service", "Password"]);

    for e in entries {
        let secret = if show { e.secret.clone() } else { mask(&e.secret) };
        table.add_row(vec![e.id.to_string(), e.service.clone(), secret]);
    }

    println!("{table}");
}
