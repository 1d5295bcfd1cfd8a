// src/crypto/padding.rs
//! PKCS#7 padding
//!
//! The pad length `n` is always in `1..=block_size`: input that is already
//! block-aligned gains a whole extra block, so removal is never ambiguous.

use crate::consts::MAX_PKCS7_BLOCK_SIZE;
use crate::error::{CoreError, Result};

fn check_block_size(block_size: usize) -> Result<()> {
    if block_size == 0 || block_size > MAX_PKCS7_BLOCK_SIZE {
        return Err(CoreError::InvalidBlockSize(block_size));
    }
    Ok(())
}

/// Append `n` bytes of value `n` so the result is a multiple of `block_size`
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    check_block_size(block_size)?;
    let n = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + n);
    padded.extend_from_slice(data);
    // n <= 255, checked above
    padded.resize(data.len() + n, n as u8);
    Ok(padded)
}

/// Strip PKCS#7 padding, returning the unpadded prefix of `data`
///
/// This is a format check, not a secret comparison, so it returns on the
/// first bad byte.
pub fn pkcs7_unpad(data: &[u8], block_size: usize) -> Result<&[u8]> {
    check_block_size(block_size)?;
    if data.is_empty() || data.len() % block_size != 0 {
        return Err(CoreError::InvalidPadding);
    }

    let last = data[data.len() - 1];
    let n = last as usize;
    if n == 0 || n > data.len() {
        return Err(CoreError::InvalidPadding);
    }

    let (body, pad) = data.split_at(data.len() - n);
    if pad.iter().any(|&b| b != last) {
        return Err(CoreError::InvalidPadding);
    }
    Ok(body)
}
