//! CredVault — a local password vault behind a single master password.
//!
//! The master password is stored as an Argon2id hash; stored service
//! passwords are kept in clear text inside the SQLite database and are only
//! handed out through a logged-in [`vault::Session`].

pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod export;
pub mod vault;
