//! Vault module — master password and credential storage.
//!
//! This module provides:
//! - The SQLite handle shared by the stores (`db`)
//! - The `CredentialEntry` record type (`entry`)
//! - Master-password lifecycle (`master`)
//! - Credential CRUD (`credentials`)
//! - `VaultService`, the session-checked API over both (`service`)
//!
//! Stored passwords are kept as plain text in the database.  The master
//! password gates access through this API; it does not encrypt the file.

pub mod credentials;
pub mod db;
pub mod entry;
pub mod master;
pub mod service;

// Re-export the most commonly used items.
pub use credentials::CredentialStore;
pub use db::Database;
pub use entry::CredentialEntry;
pub use master::MasterAuth;
pub use service::{Session, VaultService};
