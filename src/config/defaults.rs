use crate::config::app::{Crypto, Paths, Ui};
use crate::consts::{DEFAULT_KEY_SIZE, DEFAULT_STORE_PATH};

pub const CONFIG_DIR_NAME: &str = "passfile-vault";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub fn default_paths() -> Paths {
    Paths {
        store: DEFAULT_STORE_PATH.into(),
    }
}

pub fn default_crypto() -> Crypto {
    Crypto {
        key_size: DEFAULT_KEY_SIZE,
    }
}

pub fn default_ui() -> Ui {
    Ui { color: true }
}

impl Default for Paths {
    fn default() -> Self {
        default_paths()
    }
}

impl Default for Crypto {
    fn default() -> Self {
        default_crypto()
    }
}

impl Default for Ui {
    fn default() -> Self {
        default_ui()
    }
}
