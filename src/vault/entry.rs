//! The stored credential record.

use std::fmt;

use serde::Serialize;

/// One service/secret pair.
///
/// `id` is assigned by the database on insert and never reused.  The secret
/// is kept as plain text; the vault only gates access to it behind the
/// master password.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct CredentialEntry {
    pub id: i64,
    pub service: String,
    pub secret: String,
}

// Keep secrets out of logs and panic messages.
impl fmt::Debug for CredentialEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialEntry")
            .field("id", &self.id)
            .field("service", &self.service)
            .field("secret", &"<redacted>")
            .finish()
    }
}
