//! `credvault add` — store a password for a service.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{open_and_login, Cli, PolicyArgs};
use crate::crypto::{generate, GenerationPolicy};
use crate::errors::{CredVaultError, Result};

/// Execute the `add` command.
pub fn execute(
    cli: &Cli,
    service: &str,
    secret: Option<&str>,
    generated: bool,
    policy: PolicyArgs,
) -> Result<()> {
    // Determine the password from one of four sources.
    let value = if generated {
        // Source 1: Freshly generated.
        Zeroizing::new(generate(&GenerationPolicy::from(policy)))
    } else if let Some(v) = secret {
        // Source 2: Inline value on the command line.
        output::warning("Password provided on command line — it may appear in shell history.");
        Zeroizing::new(v.to_string())
    } else if !io::stdin().is_terminal() {
        // Source 3: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Zeroizing::new(buf.trim_end().to_string())
    } else {
        // Source 4: Interactive secure prompt (default).
        let pw = dialoguer::Password::new()
            .with_prompt(format!("Enter password for {service}"))
            .interact()
            .map_err(|e| CredVaultError::CommandFailed(format!("input prompt: {e}")))?;
        Zeroizing::new(pw)
    };

    let (vault, session) = open_and_login(cli)?;
    let id = vault.add_credential(&session, service, &value)?;

    output::success(&format!(
        "Stored password for '{}' as #{id} ({} total)",
        service.trim(),
        vault.credential_count(&session)?
    ));
    if generated {
        println!("{}", value.as_str());
    }

    Ok(())
}
