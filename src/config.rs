//! Configuration module
//!
//! Loads `~/.config/hovertip/config.toml`. A missing file yields defaults;
//! a malformed file also yields defaults, plus a warning for the status bar.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, TooltipConfig, TriggerConfig};

use crate::error::TooltipError;

const CONFIG_DIR: &str = "hovertip";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration and any problem encountered while reading it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(err) => {
            log::warn!("Ignoring config at {}: {}", path.display(), err);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("{} ({})", err, path.display())),
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config, TooltipError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<Config, TooltipError> {
    Ok(toml::from_str(contents)?)
}
