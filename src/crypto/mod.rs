//! Cryptographic primitives for CredVault.
//!
//! This module provides:
//! - Argon2id master-password hashing and verification (`hash`)
//! - Random password generation from a character-class policy (`generator`)

pub mod generator;
pub mod hash;

pub use generator::{generate, GenerationPolicy};
pub use hash::{generate_salt, hash_passphrase, verify_passphrase, Argon2Params};
