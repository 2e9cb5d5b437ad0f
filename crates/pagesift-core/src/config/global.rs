//! Global configuration (stored in ~/.config/pagesift/config.toml)

use std::path::PathBuf;

use crate::error::{PagesiftError, Result};

const CONFIG_DIR: &str = "pagesift";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "PAGESIFT_CONFIG_DIR";

/// Path of the per-user config file.
///
/// `PAGESIFT_CONFIG_DIR` replaces the platform config directory, mainly so
/// tests never touch the real one.
pub fn global_config_path() -> Result<PathBuf> {
    let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        PathBuf::from(env_dir)
    } else {
        dirs::config_dir()
            .ok_or_else(|| PagesiftError::Other("unable to determine config directory".to_string()))?
            .join(CONFIG_DIR)
    };

    Ok(config_dir.join(CONFIG_FILE))
}

/// Returns the source description for display purposes
pub fn source_display() -> String {
    if std::env::var(CONFIG_DIR_ENV_VAR).is_ok() {
        "custom config directory".to_string()
    } else {
        "~/.config/pagesift/config.toml".to_string()
    }
}
