// src/crypto/decrypt.rs
use tracing::debug;

use super::block_mode::decrypt_blocks;
use super::padding::pkcs7_unpad;
use crate::aliases::{CypherText, FileKey, PlainText};
use crate::consts::{AES_BLOCK_SIZE, MIN_CIPHERTEXT_LEN};
use crate::enums::CipherSuite;
use crate::error::{CoreError, Result};

/// Decrypt `IV || AES-CBC ciphertext` → plaintext (in-memory)
///
/// `InvalidPadding` is the only integrity signal. A wrong key or corrupted
/// blob can still unpad cleanly and yield garbage.
pub fn decrypt_to_vec(ciphertext: &CypherText, key: &FileKey) -> Result<PlainText> {
    let key = key.expose_secret();
    let suite = CipherSuite::from_key_len(key.len())?;

    let blob = ciphertext.expose_secret();
    if blob.len() < MIN_CIPHERTEXT_LEN {
        return Err(CoreError::MalformedCiphertext { len: blob.len() });
    }

    let (iv, body) = blob.split_at(AES_BLOCK_SIZE);
    if body.len() % AES_BLOCK_SIZE != 0 {
        return Err(CoreError::InvalidCiphertextLength(body.len()));
    }

    let mut buf = body.to_vec();
    decrypt_blocks(key, iv, &mut buf)?;
    let padded = PlainText::new(buf);

    let plaintext = pkcs7_unpad(padded.expose_secret(), AES_BLOCK_SIZE)?.to_vec();
    debug!(
        suite = %suite,
        blob_len = blob.len(),
        plaintext_len = plaintext.len(),
        "decrypted buffer"
    );
    Ok(PlainText::new(plaintext))
}
