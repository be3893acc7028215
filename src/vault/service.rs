//! Session-level orchestration over `MasterAuth` and `CredentialStore`.
//!
//! `VaultService` is the API a caller (the CLI, or any other front end)
//! talks to.  Credential operations require a `Session`, which can only be
//! obtained from a successful `login`.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::crypto::hash::Argon2Params;
use crate::errors::{CredVaultError, Result};

use super::credentials::CredentialStore;
use super::db::Database;
use super::entry::CredentialEntry;
use super::master::MasterAuth;

/// Proof of a successful `login`.
///
/// Carries no key material.  It is bound to the `VaultService` that issued
/// it and to the database handle that was open at the time; `reopen`
/// invalidates every outstanding session.  Sessions do not expire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    service_id: u64,
    generation: u64,
}

/// The vault: master password plus credential records.
pub struct VaultService {
    db: Database,
    params: Argon2Params,
    service_id: u64,
    generation: u64,
}

impl VaultService {
    /// Build a service over an already-open database.
    pub fn new(db: Database, params: Argon2Params) -> Self {
        Self {
            db,
            params,
            service_id: rand::random(),
            generation: 0,
        }
    }

    /// Open the database at `path` and build a service over it.
    pub fn open(path: &Path, params: Argon2Params) -> Result<Self> {
        Ok(Self::new(Database::open(path)?, params))
    }

    /// Close the current database and switch to the one at `path`.
    ///
    /// The new handle is opened first; on failure the old one stays in use.
    /// Sessions issued before the switch stop working.
    pub fn reopen(&mut self, path: &Path) -> Result<()> {
        let db = Database::open(path)?;
        self.db = db;
        self.generation += 1;
        info!(path = %path.display(), "switched vault database");
        Ok(())
    }

    /// Location of the backing database, `None` when in memory.
    pub fn db_path(&self) -> Option<&Path> {
        self.db.path()
    }

    fn master(&self) -> MasterAuth<'_> {
        MasterAuth::new(&self.db, self.params)
    }

    fn store(&self) -> CredentialStore<'_> {
        CredentialStore::new(&self.db)
    }

    fn check_session(&self, session: &Session) -> Result<()> {
        if session.service_id != self.service_id || session.generation != self.generation {
            debug!("rejected stale or foreign session");
            return Err(CredVaultError::Unauthorized);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Master password
    // ------------------------------------------------------------------

    /// `true` once a master password has been set.
    pub fn is_initialized(&self) -> Result<bool> {
        self.master().exists()
    }

    /// Set the master password on an uninitialized vault.
    pub fn setup(&self, passphrase: &str) -> Result<()> {
        self.master().create_exclusive(passphrase)
    }

    /// Verify the master password and issue a session.
    ///
    /// Every failure is reported as `Unauthorized`, including a vault that
    /// has not been set up yet.
    pub fn login(&self, passphrase: &str) -> Result<Session> {
        if !self.master().verify(passphrase) {
            warn!("login failed");
            return Err(CredVaultError::Unauthorized);
        }

        debug!("login succeeded");
        Ok(Session {
            service_id: self.service_id,
            generation: self.generation,
        })
    }

    /// Rotate the master password.  Needs both a session and the current
    /// password.
    pub fn change_master_passphrase(
        &self,
        session: &Session,
        current: &str,
        new: &str,
    ) -> Result<()> {
        self.check_session(session)?;
        self.master().rotate(current, new)
    }

    // ------------------------------------------------------------------
    // Credentials
    // ------------------------------------------------------------------

    pub fn list_credentials(&self, session: &Session) -> Result<Vec<CredentialEntry>> {
        self.check_session(session)?;
        self.store().list()
    }

    pub fn add_credential(&self, session: &Session, service: &str, secret: &str) -> Result<i64> {
        self.check_session(session)?;
        self.store().add(service, secret)
    }

    /// Idempotent: returns `Ok(false)` if `id` was already gone.
    pub fn delete_credential(&self, session: &Session, id: i64) -> Result<bool> {
        self.check_session(session)?;
        self.store().delete(id)
    }

    pub fn get_credential(&self, session: &Session, id: i64) -> Result<CredentialEntry> {
        self.check_session(session)?;
        self.store()
            .get(id)?
            .ok_or(CredVaultError::CredentialNotFound(id))
    }

    pub fn credential_count(&self, session: &Session) -> Result<usize> {
        self.check_session(session)?;
        self.store().count()
    }
}
