// src/crypto/encrypt.rs
use tracing::debug;

use super::block_mode::encrypt_blocks;
use super::padding::pkcs7_pad;
use super::random::fill_os_random;
use crate::aliases::{CypherText, FileKey, PlainText};
use crate::consts::AES_BLOCK_SIZE;
use crate::enums::CipherSuite;
use crate::error::{CoreError, Result};

/// Encrypt plaintext → `IV || AES-CBC ciphertext` (in-memory)
///
/// A fresh random IV is drawn for every call; reusing one under the same key
/// leaks plaintext equality. The result carries no authentication tag.
pub fn encrypt_to_vec(plaintext: &PlainText, key: &FileKey) -> Result<CypherText> {
    let suite = CipherSuite::from_key_len(key.expose_secret().len())?;

    let mut iv = [0u8; AES_BLOCK_SIZE];
    fill_os_random(&mut iv).map_err(CoreError::InsufficientEntropy)?;

    let out = seal(plaintext.expose_secret(), key.expose_secret(), &iv)?;
    debug!(
        suite = %suite,
        plaintext_len = plaintext.expose_secret().len(),
        blob_len = out.len(),
        "encrypted buffer"
    );
    Ok(CypherText::new(out))
}

/// Pad, then CBC-encrypt behind the given IV
pub(crate) fn seal(plaintext: &[u8], key: &[u8], iv: &[u8; AES_BLOCK_SIZE]) -> Result<Vec<u8>> {
    let padded = PlainText::new(pkcs7_pad(plaintext, AES_BLOCK_SIZE)?);
    let padded = padded.expose_secret();

    let mut out = vec![0u8; AES_BLOCK_SIZE + padded.len()];
    let (head, body) = out.split_at_mut(AES_BLOCK_SIZE);
    head.copy_from_slice(iv);
    encrypt_blocks(key, iv, padded, body)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    // NIST SP 800-38A, F.2.1 / F.2.3 / F.2.5: first block of each CBC example
    const NIST_IV: &str = "000102030405060708090a0b0c0d0e0f";
    const NIST_P1: &str = "6bc1bee22e409f96e93d7e117393172a";

    fn first_block(key_hex: &str) -> String {
        let key = hex::decode(key_hex).unwrap();
        let iv: [u8; 16] = hex::decode(NIST_IV).unwrap().try_into().unwrap();
        let blob = seal(&hex::decode(NIST_P1).unwrap(), &key, &iv).unwrap();

        assert_eq!(&blob[..16], &iv);
        // one data block plus a full padding block
        assert_eq!(blob.len(), 16 + 32);
        hex::encode(&blob[16..32])
    }

    #[test]
    fn aes128_cbc_known_answer() {
        assert_eq!(
            first_block("2b7e151628aed2a6abf7158809cf4f3c"),
            "7649abac8119b246cee98e9b12e9197d"
        );
    }

    #[test]
    fn aes192_cbc_known_answer() {
        assert_eq!(
            first_block("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b"),
            "4f021db243bc633d7178183a9fa071e8"
        );
    }

    #[test]
    fn aes256_cbc_known_answer() {
        assert_eq!(
            first_block("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4"),
            "f58c4c04d6e5f1ba779eabfb5f7bfbd6"
        );
    }

    #[test]
    fn fixed_iv_is_deterministic() {
        let key = [7u8; 16];
        let iv = [9u8; 16];
        assert_eq!(
            seal(b"same input", &key, &iv).unwrap(),
            seal(b"same input", &key, &iv).unwrap()
        );
    }
}
