// src/aliases.rs
//! Re-exports secure-gate's secret types
//!
//! Every buffer that holds key material or plaintext goes through one of
//! these so it is zeroized on drop.

pub use secure_gate::dynamic_alias;

// Raw AES key: 16, 24 or 32 bytes depending on the cipher suite
dynamic_alias!(FileKey, Vec<u8>);

dynamic_alias!(PlainText, Vec<u8>);
dynamic_alias!(CypherText, Vec<u8>);

// Hex-encoded key as shown to (or typed by) the user
dynamic_alias!(KeyHex, String);
