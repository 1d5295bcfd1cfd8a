// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid block size: {0} (must be in 1..=255)")]
    InvalidBlockSize(usize),

    /// Malformed or absent PKCS#7 padding. Wrong key, corrupted data and
    /// tampering all look the same from here.
    #[error("invalid padding on input")]
    InvalidPadding,

    #[error("invalid key size: {0} bytes (expected 16, 24 or 32)")]
    InvalidKeySize(usize),

    #[error("malformed ciphertext: {len} bytes is shorter than IV plus one block")]
    MalformedCiphertext { len: usize },

    #[error("invalid ciphertext length: {0} bytes is not a multiple of the block size")]
    InvalidCiphertextLength(usize),

    #[error("could not read a full IV from the system entropy source: {0}")]
    InsufficientEntropy(String),

    #[error("system entropy source failure: {0}")]
    EntropySourceFailure(String),

    #[error("invalid hex key: {0}")]
    InvalidHexKey(#[from] hex::FromHexError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
