//! Configuration loading
//!
//! Reads `~/.config/ikigai/config.toml`. A missing file means defaults; an
//! unreadable or invalid file also means defaults, plus a warning the UI shows.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, SearchConfig};

use crate::error::IkigaiError;

const CONFIG_DIR: &str = "ikigai";
const CONFIG_FILE: &str = "config.toml";

/// Result of loading the configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when the file existed but could not be used
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the configuration from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

/// Load the configuration from `path`, falling back to defaults on any problem
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        log::debug!("No config file at {}, using defaults", path.display());
        return ConfigResult::default();
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

/// Read and validate a config file, surfacing every failure
pub fn read_config(path: &Path) -> Result<Config, IkigaiError> {
    let contents = fs::read_to_string(path).map_err(|source| IkigaiError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config = toml::from_str(&contents).map_err(|e| IkigaiError::ConfigParse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    validate(&config.search)?;
    Ok(config)
}

/// Check that every configured URL is absolute
pub fn validate(search: &SearchConfig) -> Result<(), IkigaiError> {
    check_url("search_endpoint", &search.search_endpoint)?;
    check_url("fallback_search_url", &search.fallback_search_url)?;
    if let Some(relay) = search.relay() {
        check_url("cors_proxy", relay)?;
    }
    Ok(())
}

fn check_url(field: &'static str, value: &str) -> Result<(), IkigaiError> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| IkigaiError::InvalidConfigUrl {
            field,
            message: e.to_string(),
        })
}
