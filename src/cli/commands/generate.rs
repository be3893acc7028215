//! `credvault generate` — print a random password.  Needs no vault.

use crate::cli::PolicyArgs;
use crate::crypto::{generate, GenerationPolicy};
use crate::errors::Result;

/// Execute the `generate` command.
pub fn execute(policy: PolicyArgs) -> Result<()> {
    let policy = GenerationPolicy::from(policy);
    policy.validate()?;
    println!("{}", generate(&policy));
    Ok(())
}
