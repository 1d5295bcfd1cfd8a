// src/consts.rs
//! Shared constants: cipher parameters and defaults

/// AES block size, also the IV length for CBC
pub const AES_BLOCK_SIZE: usize = 16;

/// Shortest decryptable blob: one IV block plus one ciphertext block
pub const MIN_CIPHERTEXT_LEN: usize = 2 * AES_BLOCK_SIZE;

/// PKCS#7 stores the pad length in a single byte
pub const MAX_PKCS7_BLOCK_SIZE: usize = u8::MAX as usize;

/// Default key size in bytes (AES-128; a 32-character hex key)
pub const DEFAULT_KEY_SIZE: usize = 16;

/// Default record store file name
pub const DEFAULT_STORE_PATH: &str = "passwords.json";

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV_VAR: &str = "PFV_CONFIG";
