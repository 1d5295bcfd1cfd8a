// src/crypto/block_mode.rs
//! AES-CBC over already-padded, block-aligned buffers
//!
//! Padding is handled by [`super::padding`], so the `cbc` crate always runs
//! with `NoPadding` here.

use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::enums::CipherSuite;
use crate::error::{CoreError, Result};

fn encrypt_with<C>(key: &[u8], iv: &[u8], padded: &[u8], out: &mut [u8]) -> Result<()>
where
    C: BlockEncryptMut + BlockCipher,
    cbc::Encryptor<C>: KeyIvInit + BlockEncryptMut,
{
    cbc::Encryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| CoreError::InvalidKeySize(key.len()))?
        .encrypt_padded_b2b_mut::<NoPadding>(padded, out)
        .map_err(|_| CoreError::InvalidCiphertextLength(padded.len()))?;
    Ok(())
}

fn decrypt_with<C>(key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<()>
where
    C: BlockDecryptMut + BlockCipher,
    cbc::Decryptor<C>: KeyIvInit + BlockDecryptMut,
{
    let len = buf.len();
    cbc::Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| CoreError::InvalidKeySize(key.len()))?
        .decrypt_padded_mut::<NoPadding>(buf)
        .map_err(|_| CoreError::InvalidCiphertextLength(len))?;
    Ok(())
}

/// CBC-encrypt `padded` into `out` (same length) with the AES variant chosen
/// by the key length
pub(crate) fn encrypt_blocks(key: &[u8], iv: &[u8], padded: &[u8], out: &mut [u8]) -> Result<()> {
    match CipherSuite::from_key_len(key.len())? {
        CipherSuite::Aes128Cbc => encrypt_with::<Aes128>(key, iv, padded, out),
        CipherSuite::Aes192Cbc => encrypt_with::<Aes192>(key, iv, padded, out),
        CipherSuite::Aes256Cbc => encrypt_with::<Aes256>(key, iv, padded, out),
    }
}

/// CBC-decrypt `buf` in place
pub(crate) fn decrypt_blocks(key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<()> {
    match CipherSuite::from_key_len(key.len())? {
        CipherSuite::Aes128Cbc => decrypt_with::<Aes128>(key, iv, buf),
        CipherSuite::Aes192Cbc => decrypt_with::<Aes192>(key, iv, buf),
        CipherSuite::Aes256Cbc => decrypt_with::<Aes256>(key, iv, buf),
    }
}
