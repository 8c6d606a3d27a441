//! Config loading and path resolution for `Config`.
//!
//! Configuration is read-only from the engine's point of view: files are
//! parsed and validated here, but never written back.

use super::Config;
use crate::error::ConfigError;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Load configuration from the default path, or defaults if absent
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!(
                "Config file not found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific YAML file
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Loading config from {:?}", path);

        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        let config: Config = serde_yaml_ng::from_str(&contents).map_err(ConfigError::from)?;

        if let Err(e) = config.validate() {
            log::error!("Config validation failed for {:?}: {}", path, e);
            return Err(e.into());
        }

        Ok(config)
    }

    /// Directory holding the configuration file
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("splitterm")
    }

    /// Full path of the configuration file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }
}
