//! Credential records: add, list, look up, delete.

use rusqlite::{params, OptionalExtension};
use tracing::debug;

use crate::errors::{CredVaultError, Result};

use super::db::Database;
use super::entry::CredentialEntry;

/// Data-access layer over the `credentials` table.
///
/// Each method is a single statement on the shared connection, so each is
/// atomic on its own; nothing spans calls.
pub struct CredentialStore<'a> {
    db: &'a Database,
}

impl<'a> CredentialStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Store a new credential and return its id.
    ///
    /// Both fields are trimmed of surrounding whitespace and must be
    /// non-empty afterwards.
    pub fn add(&self, service: &str, secret: &str) -> Result<i64> {
        let service = service.trim();
        let secret = secret.trim();
        if service.is_empty() {
            return Err(CredVaultError::InvalidInput(
                "service name cannot be empty".into(),
            ));
        }
        if secret.is_empty() {
            return Err(CredVaultError::InvalidInput(
                "password cannot be empty".into(),
            ));
        }

        let id = self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO credentials (service, secret) VALUES (?1, ?2)",
                params![service, secret],
            )?;
            Ok(conn.last_insert_rowid())
        })?;

        debug!(id, service, "credential stored");
        Ok(id)
    }

    /// All credentials, ordered by service (ASCII case-insensitive), then id.
    pub fn list(&self) -> Result<Vec<CredentialEntry>> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, service, secret FROM credentials
                 ORDER BY service COLLATE NOCASE ASC, id ASC",
            )?;

            let rows = stmt.query_map([], |row| {
                Ok(CredentialEntry {
                    id: row.get(0)?,
                    service: row.get(1)?,
                    secret: row.get(2)?,
                })
            })?;

            let mut entries = Vec::new();
            for row in rows {
                entries.push(row?);
            }
            Ok(entries)
        })
    }

    /// Look up a single credential by id.
    pub fn get(&self, id: i64) -> Result<Option<CredentialEntry>> {
        self.db.with_conn(|conn| {
            let entry = conn
                .query_row(
                    "SELECT id, service, secret FROM credentials WHERE id = ?1",
                    params![id],
                    |row| {
                        Ok(CredentialEntry {
                            id: row.get(0)?,
                            service: row.get(1)?,
                            secret: row.get(2)?,
                        })
                    },
                )
                .optional()?;
            Ok(entry)
        })
    }

    /// Delete a credential.  Deleting a missing id is not an error.
    ///
    /// Returns `true` if a row was removed.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let affected = self.db.with_conn(|conn| {
            Ok(conn.execute("DELETE FROM credentials WHERE id = ?1", params![id])?)
        })?;

        if affected > 0 {
            debug!(id, "credential deleted");
        }
        Ok(affected > 0)
    }

    /// Number of stored credentials.
    pub fn count(&self) -> Result<usize> {
        self.db.with_conn(|conn| {
            let count: i64 =
                conn.query_row("SELECT COUNT(*) FROM credentials", [], |row| row.get(0))?;
            Ok(usize::try_from(count).unwrap_or(0))
        })
    }
}
