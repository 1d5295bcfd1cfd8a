use super::defaults::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::consts::CONFIG_ENV_VAR;
use crate::enums::CipherSuite;
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
    pub crypto: Crypto,
    pub ui: Ui,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Paths {
    /// Record file used when none is given on the command line
    pub store: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Crypto {
    /// Raw key length in bytes: 16, 24 or 32
    pub key_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Ui {
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            paths: default_paths(),
            crypto: default_crypto(),
            ui: default_ui(),
        }
    }
}

impl Config {
    pub fn cipher_suite(&self) -> Result<CipherSuite> {
        CipherSuite::from_key_len(self.crypto.key_size)
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// `$PFV_CONFIG`, else `<config dir>/passfile-vault/config.toml`
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Read and validate one config file. A missing file yields the defaults.
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    let conf: Config = toml::from_str(&content)?;
    conf.cipher_suite().map_err(|e| CoreError::Config(e.to_string()))?;
    Ok(conf)
}

/// Like [`load_from`], but a broken config file is reported and the
/// built-in defaults are used instead
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Config {
    let path = path.as_ref();
    load_from(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "ignoring config file");
        Config::default()
    })
}

/// Global config, loaded once from [`config_path`]
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| match config_path() {
        Some(path) => load_or_default(path),
        None => Config::default(),
    })
}
