//! SQLite persistence handle.
//!
//! One connection per `Database`, serialized behind a mutex.  Every store
//! operation holds the lock for its full duration, and multi-statement
//! operations run inside a transaction on that same connection.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use rusqlite::Connection;
use tracing::debug;

use crate::errors::{CredVaultError, Result};

/// Schema for the two record collections.  `AUTOINCREMENT` keeps
/// credential ids monotonic and never reused after a delete.
const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS master_password (
        id   INTEGER PRIMARY KEY,
        hash BLOB NOT NULL
    );

    CREATE TABLE IF NOT EXISTS credentials (
        id      INTEGER PRIMARY KEY AUTOINCREMENT,
        service TEXT NOT NULL,
        secret  TEXT NOT NULL
    );
";

/// Wrapper around the vault's SQLite connection.
pub struct Database {
    path: Option<PathBuf>,
    conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) the database file at `path` and ensure the schema.
    ///
    /// Missing parent directories are created.  Once the schema is in
    /// place the file is restricted to the owner on Unix, since stored
    /// secrets are plain text; a file that is not a SQLite database keeps
    /// its permissions.
    pub fn open(path: &Path) -> Result<Self> {
        if path.as_os_str().is_empty() || path.is_dir() {
            return Err(CredVaultError::InvalidDatabasePath(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let db = Self::init(conn, Some(path.to_path_buf()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            if let Err(e) = std::fs::set_permissions(path, perms) {
                tracing::warn!(error = %e, "could not restrict database file permissions");
            }
        }

        Ok(db)
    }

    /// Open a private in-memory database (tests and dry runs).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        debug!(path = ?path, "database schema ready");
        Ok(Self {
            path,
            conn: Mutex::new(conn),
        })
    }

    /// Location of the database file, `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run `f` with exclusive access to the connection.
    ///
    /// A poisoned lock is recovered: an interrupted transaction has
    /// already rolled back when its guard dropped.
    pub(crate) fn with_conn<T>(&self, f: impl FnOnce(&mut Connection) -> Result<T>) -> Result<T> {
        let mut conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut conn)
    }
}
