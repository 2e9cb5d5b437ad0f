//! Configuration for pagesift
//!
//! Lookup order: an explicit path, then `pagesift.toml` in the working
//! directory, then the global file, then built-in defaults.

pub mod global;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bail_invalid;
use crate::error::{PagesiftError, Result};

pub use types::{
    Config, PromptConfig, SelectorConfig, CONFIG_FORMAT_VERSION, DEFAULT_BACKFILL_TARGET_RATIO,
    DEFAULT_BACKFILL_TRIGGER_RATIO, DEFAULT_HISTORY_WINDOW, DEFAULT_MAX_CHARS,
};

/// Name of the project-local config file
pub const LOCAL_CONFIG_FILE: &str = "pagesift.toml";

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Local(PathBuf),
    Global(PathBuf),
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Local(path) => {
                write!(f, "{}", path.display())
            }
            ConfigSource::Global(_) => write!(f, "{}", global::source_display()),
            ConfigSource::Defaults => write!(f, "defaults"),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PagesiftError::io_operation("read config", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        fs::write(path, content)
            .map_err(|e| PagesiftError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| PagesiftError::Other(format!("failed to serialize config: {}", e)))
    }

    /// Check threshold ranges
    pub fn validate(&self) -> Result<()> {
        let selector = &self.selector;
        for (name, ratio) in [
            ("backfill_trigger_ratio", selector.backfill_trigger_ratio),
            ("backfill_target_ratio", selector.backfill_target_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                bail_invalid!(name, format!("{} (expected 0.0 to 1.0)", ratio));
            }
        }
        if selector.backfill_trigger_ratio > selector.backfill_target_ratio {
            bail_invalid!(
                "backfill_trigger_ratio",
                format!(
                    "{} (must not exceed backfill_target_ratio {})",
                    selector.backfill_trigger_ratio, selector.backfill_target_ratio
                )
            );
        }
        Ok(())
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist; the local and global files are optional.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(PagesiftError::not_found("config file", path.display()));
            }
            debug!(path = %path.display(), "config_explicit");
            return Ok((Self::load(path)?, ConfigSource::Explicit(path.to_path_buf())));
        }

        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            debug!(path = %local.display(), "config_local");
            return Ok((Self::load(&local)?, ConfigSource::Local(local)));
        }

        if let Ok(global) = global::global_config_path() {
            if global.is_file() {
                debug!(path = %global.display(), "config_global");
                return Ok((Self::load(&global)?, ConfigSource::Global(global)));
            }
        }

        debug!("config_defaults");
        Ok((Self::default(), ConfigSource::Defaults))
    }
}
