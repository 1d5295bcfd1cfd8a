// src/file_ops.rs
//! File-level encryption/decryption operations
//!
//! Whole files are read into memory, transformed with the pure primitives
//! from [`crate::crypto`], and written back. Writes go through a temp file in
//! the target directory and are renamed into place, so an interrupted write
//! never leaves a half-encrypted file behind.
//!
//! An overwritten file keeps its permissions. A newly created output file
//! gets the temp file's owner-only mode (0600 on Unix).

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::aliases::{CypherText, FileKey, PlainText};
use crate::crypto::{decrypt_to_vec, encrypt_to_vec};
use crate::error::Result;

fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    // Replacing an existing file keeps its permissions
    match fs::metadata(path) {
        Ok(meta) => tmp.as_file().set_permissions(meta.permissions())?,
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Encrypt a file on disk
///
/// Reads the plaintext file, encrypts it in-memory, writes the blob.
/// `input_path` and `output_path` may be the same file.
/// Returns the plaintext size in bytes.
pub fn encrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    key: &FileKey,
) -> Result<u64> {
    let plaintext = PlainText::new(fs::read(input_path.as_ref())?);
    let ciphertext = encrypt_to_vec(&plaintext, key)?;
    write_atomic(output_path.as_ref(), ciphertext.expose_secret())?;

    let plaintext_size_bytes = plaintext.expose_secret().len() as u64;
    debug!(
        input = %input_path.as_ref().display(),
        output = %output_path.as_ref().display(),
        plaintext_size_bytes,
        "encrypted file"
    );
    Ok(plaintext_size_bytes)
}

/// Decrypt a file on disk
///
/// Reads the blob, decrypts it in-memory, writes the plaintext. Nothing is
/// written when decryption fails.
/// Returns the plaintext size in bytes.
pub fn decrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    key: &FileKey,
) -> Result<u64> {
    let ciphertext = CypherText::new(fs::read(input_path.as_ref())?);
    let plaintext = decrypt_to_vec(&ciphertext, key)?;
    write_atomic(output_path.as_ref(), plaintext.expose_secret())?;

    let plaintext_size_bytes = plaintext.expose_secret().len() as u64;
    debug!(
        input = %input_path.as_ref().display(),
        output = %output_path.as_ref().display(),
        plaintext_size_bytes,
        "decrypted file"
    );
    Ok(plaintext_size_bytes)
}

/// Replace a file's contents with its encrypted form
pub fn encrypt_file_in_place<P: AsRef<Path>>(path: P, key: &FileKey) -> Result<u64> {
    encrypt_file(path.as_ref(), path.as_ref(), key)
}

/// Replace an encrypted file with its decrypted contents
pub fn decrypt_file_in_place<P: AsRef<Path>>(path: P, key: &FileKey) -> Result<u64> {
    decrypt_file(path.as_ref(), path.as_ref(), key)
}

/// Create an empty file if nothing exists at `path`. Returns `true` when a
/// file was created.
pub fn create_file_if_missing<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => {
            info!(path = %path.display(), "created file");
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e.into()),
    }
}

pub fn delete_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::remove_file(path)?;
    info!(path = %path.display(), "removed file");
    Ok(())
}
