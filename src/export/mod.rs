//! Read-only projections of the credential list.
//!
//! Supported formats:
//! - `csv`: header `id,service,secret`, RFC 4180 quoting
//! - `json`: array of `{ "id", "service", "secret" }` objects

use std::fmt::Write;

use crate::errors::{CredVaultError, Result};
use crate::vault::CredentialEntry;

/// Output formats accepted by `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = CredVaultError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(CredVaultError::InvalidInput(format!(
                "unknown export format '{other}' — use 'csv' or 'json'"
            ))),
        }
    }
}

/// Render `entries` in the requested format.
pub fn render(entries: &[CredentialEntry], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => Ok(to_csv(entries)),
        ExportFormat::Json => to_json(entries),
    }
}

/// Format entries as CSV with a header row.  Lines end with CRLF.
pub fn to_csv(entries: &[CredentialEntry]) -> String {
    let mut out = String::from("id,service,secret\r\n");
    for e in entries {
        let _ = write!(
            out,
            "{},{},{}\r\n",
            e.id,
            csv_field(&e.service),
            csv_field(&e.secret)
        );
    }
    out
}

/// Format entries as a pretty-printed JSON array.
pub fn to_json(entries: &[CredentialEntry]) -> Result<String> {
    serde_json::to_string_pretty(entries)
        .map_err(|e| CredVaultError::SerializationError(format!("JSON export: {e}")))
}

/// Quote a field if it contains a delimiter, quote, or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
