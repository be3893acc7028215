use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in CredVault.
#[derive(Debug, Error)]
pub enum CredVaultError {
    // --- Caller errors ---
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized — wrong master password or not logged in")]
    Unauthorized,

    #[error("Vault is already initialized — use `change-password` to rotate the master password")]
    AlreadyInitialized,

    #[error("Credential #{0} not found")]
    CredentialNotFound(i64),

    // --- Storage errors ---
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    #[error("Database path {0} is not usable")]
    InvalidDatabasePath(PathBuf),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),
}

/// Coarse classification callers use to decide how to present an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty or malformed argument.
    InvalidInput,
    /// Wrong passphrase or missing session.
    Unauthorized,
    /// `setup` on a vault that already has a master password.
    AlreadyInitialized,
    /// Backend unreachable, corrupt, or I/O failure.
    StorageFailure,
}

impl CredVaultError {
    /// Map this error onto the four-way caller taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_)
            | Self::CredentialNotFound(_)
            | Self::CommandFailed(_)
            | Self::ClipboardError(_) => ErrorKind::InvalidInput,
            Self::Unauthorized => ErrorKind::Unauthorized,
            Self::AlreadyInitialized => ErrorKind::AlreadyInitialized,
            Self::Storage(_)
            | Self::HashingFailed(_)
            | Self::ConfigError(_)
            | Self::InvalidDatabasePath(_)
            | Self::Io(_)
            | Self::SerializationError(_) => ErrorKind::StorageFailure,
        }
    }
}

/// Convenience type alias for CredVault results.
pub type Result<T> = std::result::Result<T, CredVaultError>;
