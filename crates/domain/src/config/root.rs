use serde::{Deserialize, Serialize};

use super::api::ApiConfig;
use super::catalog::CatalogConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_PATH: &str = "area-catalog.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/area-catalog/config.toml";

/// Main configuration structure for the AREA catalog client
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Backend API configuration (base URL, timeouts)
    #[serde(default)]
    pub api: ApiConfig,

    /// Catalog view configuration
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. area-catalog.toml in current directory
    /// 3. /etc/area-catalog/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        config.normalize();
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(url) = overrides.api_base_url {
            self.api.base_url = url;
        }
        if let Some(per_page) = overrides.items_per_page {
            self.catalog.items_per_page = per_page;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Endpoint paths are appended with a leading slash, so a trailing one
    /// on the base URL would double up.
    fn normalize(&mut self) {
        let trimmed = self.api.base_url.trim().trim_end_matches('/');
        if trimmed.len() != self.api.base_url.len() {
            self.api.base_url = trimmed.to_string();
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.items_per_page == 0 {
            return Err(ConfigError::Validation(
                "Items per page cannot be 0".to_string(),
            ));
        }

        if self.api.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "No API base URL configured".to_string(),
            ));
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(format!(
                "API base URL '{}' must start with http:// or https://",
                self.api.base_url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "API timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub api_base_url: Option<String>,
    pub items_per_page: Option<usize>,
    pub log_level: Option<String>,
}
