use crate::models::settings::AppConfig;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Points at an alternative config file
pub const CONFIG_PATH_ENV: &str = "EVENT_BOARD_CONFIG";
/// Overrides `api_base_url` from the file
pub const API_URL_ENV: &str = "EVENT_BOARD_API_URL";

const CONFIG_FILE_NAME: &str = "config.toml";

pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Service reading from `$EVENT_BOARD_CONFIG` or the platform config directory
    pub fn new() -> Self {
        Self::with_path(Self::resolve_config_path())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load, apply environment overrides and validate.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load(&self) -> Result<AppConfig> {
        let mut config = self.read_file()?;

        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                log::info!("Using API base URL from {}", API_URL_ENV);
                config.api_base_url = url;
            }
        }

        config
            .validate()
            .map_err(|e| anyhow!("Invalid configuration in {:?}: {}", self.path, e))?;
        Ok(config)
    }

    fn read_file(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config file at {:?}; using defaults", self.path);
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .context(format!("Failed to read config file: {:?}", self.path))?;
        toml::from_str(&content).context(format!("Failed to parse config file: {:?}", self.path))
    }

    fn resolve_config_path() -> PathBuf {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return PathBuf::from(path);
        }

        if let Some(dirs) = ProjectDirs::from("com", "EventBoard", "EventBoard") {
            dirs.config_dir().join(CONFIG_FILE_NAME)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for config");
            PathBuf::from(CONFIG_FILE_NAME)
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
