// src/records.rs
//! Password records kept as a pretty-printed JSON array
//!
//! The record file is plain JSON while unlocked; the crypto layer treats it as
//! an opaque byte buffer. Appending to an encrypted store fails with a JSON
//! error rather than corrupting it.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PasswordEntry {
    pub website: String,
    pub username: String,
    pub password: String,
}

impl PasswordEntry {
    pub fn new(
        website: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            website: website.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Load all entries. A missing or empty file is an empty store.
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<PasswordEntry>> {
    let data = match fs::read(path.as_ref()) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_slice(&data)?)
}

/// Overwrite the store with `entries`, two-space indented
pub fn save_entries<P: AsRef<Path>>(path: P, entries: &[PasswordEntry]) -> Result<()> {
    let json = serde_json::to_vec_pretty(entries)?;
    fs::write(path.as_ref(), json)?;
    Ok(())
}

/// Append one entry and persist the whole list. Returns the new entry count.
pub fn append_entry<P: AsRef<Path>>(path: P, entry: PasswordEntry) -> Result<usize> {
    let mut entries = load_entries(path.as_ref())?;
    entries.push(entry);
    save_entries(path.as_ref(), &entries)?;
    debug!(path = %path.as_ref().display(), count = entries.len(), "appended record");
    Ok(entries.len())
}
