// src/enums.rs
//! Public enum types used throughout the crate

use std::fmt;

use crate::error::{CoreError, Result};

/// AES-CBC variant, selected by key length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum CipherSuite {
    #[default]
    Aes128Cbc,
    Aes192Cbc,
    Aes256Cbc,
}

impl CipherSuite {
    /// Pick the suite matching a raw key length
    pub fn from_key_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(CipherSuite::Aes128Cbc),
            24 => Ok(CipherSuite::Aes192Cbc),
            32 => Ok(CipherSuite::Aes256Cbc),
            other => Err(CoreError::InvalidKeySize(other)),
        }
    }

    pub fn key_len(self) -> usize {
        match self {
            CipherSuite::Aes128Cbc => 16,
            CipherSuite::Aes192Cbc => 24,
            CipherSuite::Aes256Cbc => 32,
        }
    }

    /// Length of the hex form shown to users
    pub fn hex_len(self) -> usize {
        self.key_len() * 2
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherSuite::Aes128Cbc => "AES-128-CBC",
            CipherSuite::Aes192Cbc => "AES-192-CBC",
            CipherSuite::Aes256Cbc => "AES-256-CBC",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_len_round_trips_through_from_key_len() {
        for suite in [
            CipherSuite::Aes128Cbc,
            CipherSuite::Aes192Cbc,
            CipherSuite::Aes256Cbc,
        ] {
            assert_eq!(CipherSuite::from_key_len(suite.key_len()).unwrap(), suite);
        }
    }

    #[test]
    fn unsupported_key_len_is_rejected() {
        for len in [0, 8, 15, 17, 31, 33, 64] {
            assert!(matches!(
                CipherSuite::from_key_len(len),
                Err(CoreError::InvalidKeySize(n)) if n == len
            ));
        }
    }

    #[test]
    fn default_is_aes128_with_32_hex_chars() {
        assert_eq!(CipherSuite::default().hex_len(), 32);
        assert_eq!(CipherSuite::default().to_string(), "AES-128-CBC");
    }
}
