//! Master-password record: creation, verification, rotation.
//!
//! The `master_password` table holds at most one row.  Its `hash` column is
//! an Argon2id PHC string stored as a BLOB; TEXT values written by other
//! tools are read as well.

use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use tracing::{debug, info, warn};

use crate::crypto::hash::{hash_passphrase, verify_passphrase, Argon2Params};
use crate::errors::{CredVaultError, Result};

use super::db::Database;

/// Lifecycle of the single master-password hash.
pub struct MasterAuth<'a> {
    db: &'a Database,
    params: Argon2Params,
}

impl<'a> MasterAuth<'a> {
    /// `params` only affect newly written hashes; verification reads the
    /// parameters embedded in the stored digest.
    pub fn new(db: &'a Database, params: Argon2Params) -> Self {
        Self { db, params }
    }

    /// `true` if a master password has been set.
    pub fn exists(&self) -> Result<bool> {
        self.db.with_conn(|conn| record_exists(conn))
    }

    /// Set the master password, replacing any existing record.
    ///
    /// The old rows are deleted and the new one inserted in a single
    /// transaction, so readers never see zero or two records.
    pub fn create(&self, passphrase: &str) -> Result<()> {
        require_passphrase(passphrase)?;
        let hash = hash_passphrase(passphrase.as_bytes(), &self.params)?;

        self.db.with_conn(|conn| {
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
            replace_record(&tx, &hash)?;
            tx.commit()?;
            Ok(())
        })?;

        info!("master password created");
        Ok(())
    }

    /// Like `create`, but fails with `AlreadyInitialized` if a record exists.
    ///
    /// The existence check and the insert share one transaction.
    pub fn create_exclusive(&self, passphrase: &str) -> Result<()> {
        require_passphrase(passphrase)?;
        let hash = hash_passphrase(passphrase.as_bytes(), &self.params)?;

        self.db.with_conn(|conn| {
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
            if record_exists(&tx)? {
                return Err(CredVaultError::AlreadyInitialized);
            }
            replace_record(&tx, &hash)?;
            tx.commit()?;
            Ok(())
        })?;

        info!("master password created");
        Ok(())
    }

    /// Check `passphrase` against the stored hash.
    ///
    /// Returns `false` when no record exists, when the stored digest is
    /// corrupt, or when the database cannot be read.  Never errors.
    pub fn verify(&self, passphrase: &str) -> bool {
        let stored = self
            .db
            .with_conn(|conn| read_record(conn))
            .unwrap_or_else(|e| {
                warn!(error = %e, "could not read master password record");
                None
            });

        match stored {
            Some(bytes) => check_stored(passphrase, &bytes),
            None => false,
        }
    }

    /// Replace the master password after checking the current one.
    ///
    /// The existing row is updated in place.  Verification and update run
    /// in the same transaction, and a failed check leaves the record intact.
    pub fn rotate(&self, current: &str, new: &str) -> Result<()> {
        self.db.with_conn(|conn| {
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

            let authorized = match read_record(&tx)? {
                Some(bytes) => check_stored(current, &bytes),
                None => false,
            };
            if !authorized {
                return Err(CredVaultError::Unauthorized);
            }
            require_passphrase(new)?;

            let hash = hash_passphrase(new.as_bytes(), &self.params)?;
            tx.execute(
                "UPDATE master_password SET hash = ?1",
                params![hash.as_bytes()],
            )?;
            tx.commit()?;
            Ok(())
        })?;

        info!("master password rotated");
        Ok(())
    }
}

fn require_passphrase(passphrase: &str) -> Result<()> {
    if passphrase.is_empty() {
        return Err(CredVaultError::InvalidInput(
            "master password cannot be empty".into(),
        ));
    }
    Ok(())
}

fn record_exists(conn: &Connection) -> Result<bool> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM master_password", [], |row| {
        row.get(0)
    })?;
    Ok(count > 0)
}

fn replace_record(conn: &Connection, hash: &str) -> Result<()> {
    let removed = conn.execute("DELETE FROM master_password", [])?;
    if removed > 0 {
        debug!(removed, "discarded previous master password record");
    }
    conn.execute(
        "INSERT INTO master_password (hash) VALUES (?1)",
        params![hash.as_bytes()],
    )?;
    Ok(())
}

/// Raw bytes of the stored digest, whether written as BLOB or TEXT.
fn read_record(conn: &Connection) -> Result<Option<Vec<u8>>> {
    let stored = conn
        .query_row("SELECT hash FROM master_password LIMIT 1", [], |row| {
            Ok(match row.get_ref(0)? {
                ValueRef::Blob(b) => Some(b.to_vec()),
                ValueRef::Text(t) => Some(t.to_vec()),
                _ => None,
            })
        })
        .optional()?;

    match stored {
        Some(Some(bytes)) => Ok(Some(bytes)),
        Some(None) => {
            warn!("master password record has an unexpected column type");
            Ok(Some(Vec::new()))
        }
        None => Ok(None),
    }
}

fn check_stored(passphrase: &str, stored: &[u8]) -> bool {
    match std::str::from_utf8(stored) {
        Ok(digest) => verify_passphrase(passphrase.as_bytes(), digest),
        Err(_) => {
            warn!("stored master hash is not valid UTF-8");
            false
        }
    }
}
