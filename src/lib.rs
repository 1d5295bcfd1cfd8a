// src/lib.rs
//! passfile-vault: whole-file AES-CBC encryption for a small password store
//!
//! Features:
//! - AES-128/192/256-CBC with PKCS#7 padding, random IV per encryption
//! - Blob format: `IV (16 bytes) || ciphertext`
//! - JSON record store of website / username / password entries
//! - secure-gate wrappers so keys and plaintext zeroize on drop
//!
//! Known limitation: blobs are not authenticated and keys are raw random
//! bytes, not derived from a passphrase. Corruption or tampering may go
//! unnoticed unless it breaks the padding.

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod enums;
pub mod error;
pub mod file_ops;
pub mod key_ops;
pub mod records;

// Re-export everything users need at the crate root
pub use aliases::{CypherText, FileKey, KeyHex, PlainText};
pub use config::load as load_config;
pub use crypto::{decrypt_to_vec, encrypt_to_vec, pkcs7_pad, pkcs7_unpad};
pub use enums::CipherSuite;
pub use error::{CoreError, Result as CoreResult};
pub use key_ops::{generate_key, parse_hex_key, random_bytes_hex};
pub use records::PasswordEntry;
