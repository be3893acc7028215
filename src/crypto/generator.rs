//! Random password generation.
//!
//! The alphabet is assembled from the enabled character classes and each
//! character is an independent uniform draw from the OS RNG.  No class
//! coverage is enforced: a 4-character password with every class enabled
//! may well contain no digit.

use rand::rngs::OsRng;
use rand::{Rng, TryRngCore};

use crate::errors::{CredVaultError, Result};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Symbol class used when `include_symbols` is set.
pub const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.?/";

/// Default generated length.
pub const DEFAULT_LENGTH: usize = 16;

/// Character-class policy for `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPolicy {
    pub length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_upper: true,
            include_lower: true,
            include_digits: true,
            include_symbols: true,
        }
    }
}

impl GenerationPolicy {
    /// Reject a zero length.  `generate` itself never fails and treats 0 as 1.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(CredVaultError::InvalidInput(
                "password length must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// The candidate alphabet: lower, upper, digits, symbols in that order.
    ///
    /// Falls back to letters and digits when every class is disabled.
    pub fn alphabet(&self) -> Vec<u8> {
        let mut alphabet = Vec::with_capacity(90);
        if self.include_lower {
            alphabet.extend_from_slice(LOWERCASE);
        }
        if self.include_upper {
            alphabet.extend_from_slice(UPPERCASE);
        }
        if self.include_digits {
            alphabet.extend_from_slice(DIGITS);
        }
        if self.include_symbols {
            alphabet.extend_from_slice(SYMBOLS);
        }

        if alphabet.is_empty() {
            alphabet.extend_from_slice(LOWERCASE);
            alphabet.extend_from_slice(UPPERCASE);
            alphabet.extend_from_slice(DIGITS);
        }
        alphabet
    }
}

/// Generate a random password according to `policy`.
pub fn generate(policy: &GenerationPolicy) -> String {
    let alphabet = policy.alphabet();
    let length = policy.length.max(1);
    let mut rng = OsRng.unwrap_err();

    (0..length)
        .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
        .collect()
}
