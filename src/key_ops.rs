// src/key_ops.rs
//! Key generation and representation utilities
//!
//! The crypto core only ever sees raw key bytes. Hex strings are how keys
//! are shown to and typed back by a person; that conversion lives here.

use std::fmt;

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;

use crate::aliases::{FileKey, KeyHex};
use crate::crypto::fill_os_random;
use crate::enums::CipherSuite;
use crate::error::{CoreError, Result};

/// `n` bytes from the OS CSPRNG, uppercase hex (`2n` characters)
///
/// Used for keys and as a general token generator.
pub fn random_bytes_hex(n: usize) -> Result<String> {
    let bytes = FileKey::new(random_bytes(n)?);
    Ok(hex::encode_upper(bytes.expose_secret()))
}

fn random_bytes(n: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; n];
    fill_os_random(&mut buf).map_err(CoreError::EntropySourceFailure)?;
    Ok(buf)
}

/// Generate a new random key for `suite`
pub fn generate_key(suite: CipherSuite) -> Result<FileKey> {
    Ok(FileKey::new(random_bytes(suite.key_len())?))
}

/// Generate a new random key already in its displayable hex form
pub fn generate_key_hex(suite: CipherSuite) -> Result<KeyHex> {
    Ok(KeyHex::new(random_bytes_hex(suite.key_len())?))
}

/// Parse a user-entered hex key (either case, surrounding whitespace ignored)
pub fn parse_hex_key(input: &str) -> Result<FileKey> {
    let bytes = FileKey::new(hex::decode(input.trim())?);
    CipherSuite::from_key_len(bytes.expose_secret().len())?;
    Ok(bytes)
}

/// Multiple string representations of a key for export/display
///
/// `Debug` output is redacted; read the fields to show the key.
#[derive(Clone)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

impl fmt::Debug for KeyRepr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyRepr").finish_non_exhaustive()
    }
}

pub fn key_representations(key: &FileKey) -> KeyRepr {
    KeyRepr {
        hex: hex::encode_upper(key.expose_secret()),
        base64: STANDARD.encode(key.expose_secret()),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(key.expose_secret()),
    }
}
