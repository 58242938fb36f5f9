//! Configuration loading
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/purrse/config.toml) when it exists
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/purrse.toml");

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the plan and goal files
    pub data_dir: PathBuf,
    /// User whose plan is read and written when none is given
    pub default_username: String,
    /// Currency label used when printing amounts
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_username: "Tom The Cat".to_string(),
            currency: "RM".to_string(),
        }
    }
}

impl Config {
    /// Load configuration (override first, then embedded default)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let content = match override_path {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            })?,
            None => match default_config_path() {
                Some(path) if path.exists() => {
                    debug!("Using config override at {}", path.display());
                    fs::read_to_string(&path).map_err(|e| {
                        Error::Config(format!("Failed to read {}: {}", path.display(), e))
                    })?
                }
                _ => DEFAULT_CONFIG.to_string(),
            },
        };

        parse_config(&content)
    }
}

/// Platform data directory for Purrse, or `./data` when there is none
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("purrse"))
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("purrse").join("config.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    storage: Option<RawStorage>,
    user: Option<RawUser>,
    display: Option<RawDisplay>,
}

#[derive(Debug, Deserialize)]
struct RawStorage {
    data_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    default_username: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDisplay {
    currency: Option<String>,
}

/// Parse config from TOML content
fn parse_config(content: &str) -> Result<Config> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = Config::default();

    if let Some(data_dir) = raw.storage.and_then(|s| s.data_dir) {
        config.data_dir = data_dir;
    }
    if let Some(username) = raw.user.and_then(|u| u.default_username) {
        config.default_username = username;
    }
    if let Some(currency) = raw.display.and_then(|d| d.currency) {
        config.currency = currency;
    }

    Ok(config)
}
