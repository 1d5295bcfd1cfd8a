// src/crypto/random.rs
use rand::rngs::OsRng;
use rand::TryRngCore;

/// Fill `buf` from the operating system CSPRNG. Never falls back to a
/// userspace generator.
pub(crate) fn fill_os_random(buf: &mut [u8]) -> std::result::Result<(), String> {
    OsRng.try_fill_bytes(buf).map_err(|e| e.to_string())
}
