//! Application configuration.
//!
//! Loaded from `config.toml` in the data directory; a missing file yields
//! the defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Planning view settings
    #[serde(default)]
    pub planning: PlanningSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            planning: PlanningSettings::default(),
        }
    }
}

impl AppConfig {
    /// Path of the collections database.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}

/// Settings for attendance and cost statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningSettings {
    /// Gym membership fee per month
    pub monthly_fee: f64,
    /// Currency symbol appended to amounts
    pub currency: String,
}

impl Default for PlanningSettings {
    fn default() -> Self {
        Self {
            monthly_fee: 25.00,
            currency: "€".to_string(),
        }
    }
}

const DATABASE_FILE: &str = "liftlog.db";

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "liftlog", "LiftLog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from file.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load configuration from an explicit path.
pub fn load_config_from(path: &PathBuf) -> Result<AppConfig, ConfigError> {
    let data_dir = path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(get_data_dir);

    if !path.exists() {
        return Ok(AppConfig {
            data_dir,
            ..Default::default()
        });
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = data_dir;

    Ok(config)
}

/// Save application configuration to file.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save configuration to an explicit path.
pub fn save_config_to(config: &AppConfig, path: &PathBuf) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
