//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::Parser;

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{CredVaultError, Result};
use crate::vault::{Session, VaultService};

/// Environment variable read before prompting for the master password.
pub const PASSWORD_ENV: &str = "CREDVAULT_PASSWORD";

/// CredVault CLI: local password vault.
#[derive(Parser)]
#[command(
    name = "credvault",
    about = "Local password vault behind a single master password",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database file (default: `db_path` from .credvault.toml)
    #[arg(long, global = true, env = "CREDVAULT_DB")]
    pub db: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create the master password for a new vault
    Init,

    /// Show the database location and whether it is initialized
    Status,

    /// Store a password for a service
    Add {
        /// Service name (e.g. Gmail)
        service: String,
        /// Password (omit for interactive prompt)
        secret: Option<String>,
        /// Generate the password instead of entering it
        #[arg(short, long, conflicts_with = "secret")]
        generate: bool,
        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// List stored passwords
    List {
        /// Show passwords instead of masking them
        #[arg(long)]
        show: bool,
    },

    /// Delete a stored password
    Delete {
        /// Entry id (see `list`)
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Copy a stored password to the clipboard
    Copy {
        /// Entry id (see `list`)
        id: i64,
    },

    /// Generate a random password
    Generate {
        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Change the master password
    ChangePassword,

    /// Export all stored passwords
    Export {
        /// Output format: csv (default) or json
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Output file path (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Switch to another database file and remember it
    Db {
        /// Path of the database file (created if missing)
        path: String,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

/// Password generation flags shared by `generate` and `add --generate`.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct PolicyArgs {
    /// Password length
    #[arg(short, long, default_value_t = crate::crypto::generator::DEFAULT_LENGTH,
          value_parser = clap::value_parser!(u16).range(MIN_GENERATED_LEN..=MAX_GENERATED_LEN).map(usize::from))]
    pub length: usize,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,
}

/// Bounds for generated password length on the command line.
pub const MIN_GENERATED_LEN: i64 = 4;
pub const MAX_GENERATED_LEN: i64 = 64;

impl From<PolicyArgs> for crate::crypto::GenerationPolicy {
    fn from(args: PolicyArgs) -> Self {
        Self {
            length: args.length,
            include_upper: !args.no_upper,
            include_lower: !args.no_lower,
            include_digits: !args.no_digits,
            include_symbols: !args.no_symbols,
        }
    }
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the master password, trying in order:
/// 1. `CREDVAULT_PASSWORD` env var (scripts)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password(prompt: &str) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(|e| CredVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new master password with confirmation.
///
/// `env_var` lets scripted runs supply it (`CREDVAULT_PASSWORD` for `init`,
/// `CREDVAULT_NEW_PASSWORD` for `change-password`).
pub fn prompt_new_password(env_var: &str) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(env_var) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let password = dialoguer::Password::new()
        .with_prompt("Choose master password")
        .with_confirmation("Confirm master password", "Passwords do not match, try again")
        .interact()
        .map_err(|e| CredVaultError::CommandFailed(format!("password prompt: {e}")))?;

    Ok(Zeroizing::new(password))
}

/// The directory holding `.credvault.toml`: the current working directory.
pub fn config_dir() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

/// Resolve the database path: `--db` wins, then `db_path` from settings.
pub fn db_path(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    let dir = config_dir()?;
    Ok(match &cli.db {
        Some(p) => dir.join(p),
        None => settings.db_path(&dir),
    })
}

/// Load settings and open the vault the CLI arguments point at.
pub fn open_vault(cli: &Cli) -> Result<VaultService> {
    let settings = Settings::load(&config_dir()?)?;
    let path = db_path(cli, &settings)?;
    VaultService::open(&path, settings.argon2_params())
}

/// Open the vault and log in, prompting for the master password.
pub fn open_and_login(cli: &Cli) -> Result<(VaultService, Session)> {
    let vault = open_vault(cli)?;

    if !vault.is_initialized()? {
        output::tip("Run `credvault init` to create a master password.");
        return Err(CredVaultError::CommandFailed(
            "vault has no master password yet".into(),
        ));
    }

    let password = prompt_password("Enter master password")?;
    let session = vault.login(&password)?;
    Ok((vault, session))
}
