// src/crypto/mod.rs
//! Pure cryptographic operations. No I/O, no global state.
//!
//! AES-CBC with PKCS#7 padding. A blob is laid out as
//! `IV (16 bytes) || ciphertext`, the ciphertext always a non-empty multiple
//! of the block size.
//!
//! There is no authentication tag and no key derivation: the key is raw
//! random bytes the user has to keep. Tampering is not detected beyond what
//! the padding check happens to catch.
mod block_mode;
mod decrypt;
mod encrypt;
pub mod padding;
mod random;

pub use decrypt::decrypt_to_vec;
pub use encrypt::encrypt_to_vec;
pub use padding::{pkcs7_pad, pkcs7_unpad};

pub(crate) use random::fill_os_random;
