//! Master-password hashing using Argon2id.
//!
//! Digests are stored as PHC strings, so the salt and cost parameters
//! travel with the hash.  Verification reads them back from the stored
//! string and never needs the current `Settings`.

use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;
use rand::TryRngCore;
use tracing::warn;

use crate::errors::{CredVaultError, Result};

/// Length of the random salt in bytes (256 bits).
const SALT_LEN: usize = 32;

/// Length of the hash output in bytes.
const OUTPUT_LEN: usize = 32;

/// Minimum safe memory cost in KiB (8 MB).
const MIN_MEMORY_KIB: u32 = 8_192;

/// Largest memory cost in KiB accepted from settings or a stored hash (4 GiB).
const MAX_MEMORY_KIB: u32 = 4 * 1024 * 1024;

/// Largest iteration count accepted from settings or a stored hash.
const MAX_ITERATIONS: u32 = 64;

/// Largest lane count accepted from settings or a stored hash.
const MAX_PARALLELISM: u32 = 64;

/// Configurable Argon2id parameters.
///
/// These map 1:1 to the fields in `Settings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Params {
    /// Memory cost in KiB (default: 65 536 = 64 MB).
    pub memory_kib: u32,
    /// Number of iterations (default: 3).
    pub iterations: u32,
    /// Parallelism lanes (default: 4).
    pub parallelism: u32,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            memory_kib: 65_536,
            iterations: 3,
            parallelism: 4,
        }
    }
}

impl Argon2Params {
    /// Build an `Argon2` hasher, rejecting dangerously weak settings.
    fn hasher(&self) -> Result<Argon2<'static>> {
        self.check_bounds().map_err(CredVaultError::HashingFailed)?;

        let params = Params::new(
            self.memory_kib,
            self.iterations,
            self.parallelism,
            Some(OUTPUT_LEN),
        )
        .map_err(|e| CredVaultError::HashingFailed(format!("invalid Argon2 params: {e}")))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    /// Reject costs that are too weak to be safe or too large to run.
    fn check_bounds(&self) -> std::result::Result<(), String> {
        if !(MIN_MEMORY_KIB..=MAX_MEMORY_KIB).contains(&self.memory_kib) {
            return Err(format!(
                "Argon2 memory_kib must be within {MIN_MEMORY_KIB}..={MAX_MEMORY_KIB} (got {})",
                self.memory_kib
            ));
        }
        if !(1..=MAX_ITERATIONS).contains(&self.iterations) {
            return Err(format!(
                "Argon2 iterations must be within 1..={MAX_ITERATIONS} (got {})",
                self.iterations
            ));
        }
        if !(1..=MAX_PARALLELISM).contains(&self.parallelism) {
            return Err(format!(
                "Argon2 parallelism must be within 1..={MAX_PARALLELISM} (got {})",
                self.parallelism
            ));
        }
        Ok(())
    }
}

/// Hash a passphrase with a fresh random salt.
///
/// Returns the PHC string (`$argon2id$v=19$m=...$<salt>$<hash>`).
pub fn hash_passphrase(passphrase: &[u8], params: &Argon2Params) -> Result<String> {
    let argon2 = params.hasher()?;
    let salt_bytes = generate_salt()?;
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| CredVaultError::HashingFailed(format!("salt encoding: {e}")))?;

    let hash = argon2
        .hash_password(passphrase, &salt)
        .map_err(|e| CredVaultError::HashingFailed(format!("Argon2id hashing failed: {e}")))?;

    Ok(hash.to_string())
}

/// Check a passphrase against a stored PHC string.
///
/// Never fails: a digest that cannot be parsed or verified is logged
/// and treated as a mismatch, as is one whose embedded costs fall outside
/// the bounds accepted for hashing.  The final digest comparison is constant-time.
pub fn verify_passphrase(passphrase: &[u8], stored: &str) -> bool {
    let parsed = match PasswordHash::new(stored) {
        Ok(hash) => hash,
        Err(e) => {
            warn!(error = %e, "stored master hash is malformed");
            return false;
        }
    };

    let embedded = match Params::try_from(&parsed) {
        Ok(params) => Argon2Params {
            memory_kib: params.m_cost(),
            iterations: params.t_cost(),
            parallelism: params.p_cost(),
        },
        Err(e) => {
            warn!(error = %e, "stored master hash has unreadable parameters");
            return false;
        }
    };
    if let Err(reason) = embedded.check_bounds() {
        warn!(%reason, "stored master hash has out-of-range parameters");
        return false;
    }

    match Argon2::default().verify_password(passphrase, &parsed) {
        Ok(()) => true,
        Err(password_hash::Error::Password) => false,
        Err(e) => {
            warn!(error = %e, "stored master hash could not be checked");
            false
        }
    }
}

/// Generate a cryptographically random 32-byte salt from the OS RNG.
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| CredVaultError::HashingFailed(format!("OS random source: {e}")))?;
    Ok(salt)
}
