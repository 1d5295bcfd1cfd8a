// tests/common.rs
//! Shared test utilities

#![allow(dead_code)]

use passfile_vault::aliases::FileKey;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a test-writer subscriber (respects RUST_LOG=)
/// Safe to call from every test
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// Deterministic key of `len` bytes, for tests that need a known key
pub fn fixed_key(len: usize, byte: u8) -> FileKey {
    FileKey::new(vec![byte; len])
}
