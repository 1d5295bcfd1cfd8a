// src/config/mod.rs
//! Configuration system for passfile-vault
//!
//! Central, lazy-loaded global config from TOML with an env override for the
//! file location. Only the CLI reads it; the crypto core takes everything as
//! arguments.

pub use app::{config_path, load, load_from, load_or_default, Config, Crypto, Paths, Ui};

mod app;
mod defaults;
