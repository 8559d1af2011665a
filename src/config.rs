//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::data::{ColumnConfig, DataSource};

/// Default CSV resource: the 2018 World Happiness Report
pub const DEFAULT_DATA_SOURCE: &str =
    "https://raw.githubusercontent.com/tatyskya/dataset_for_ChatGPT/main/2018.csv";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Data source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_source")]
    pub source: String,

    #[serde(default = "default_country_column")]
    pub country_column: String,

    #[serde(default = "default_score_column")]
    pub score_column: String,
}

fn default_source() -> String {
    DEFAULT_DATA_SOURCE.to_string()
}

fn default_country_column() -> String {
    "Country or region".to_string()
}

fn default_score_column() -> String {
    "Score".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            country_column: default_country_column(),
            score_column: default_score_column(),
        }
    }
}

impl DataConfig {
    pub fn data_source(&self) -> DataSource {
        DataSource::parse(&self.source)
    }

    pub fn columns(&self) -> ColumnConfig {
        ColumnConfig::new(&self.country_column, &self.score_column)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub debug: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// A config file that exists but cannot be read or parsed is an error.
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("happiness-dashboard").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first_existing(&config_paths)
    }

    /// Load the first path that exists, or fall back to environment-only config
    fn load_first_existing(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        match paths.iter().find(|p| p.exists()) {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::from_env()),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Data overrides
        if let Some(source) = var("HAPPINESS_DATA_SOURCE") {
            self.data.source = source;
        }

        // Server overrides
        if let Some(host) = var("HAPPINESS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("HAPPINESS_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(debug) = var("HAPPINESS_DEBUG") {
            self.server.debug = debug.to_lowercase() != "false" && debug != "0";
        }

        // Logging overrides
        if let Some(level) = var("HAPPINESS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("HAPPINESS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# Happiness Dashboard Configuration
#
# Environment variables override these settings:
# - HAPPINESS_DATA_SOURCE
# - HAPPINESS_HOST
# - HAPPINESS_PORT
# - HAPPINESS_DEBUG
# - HAPPINESS_LOG_LEVEL
# - HAPPINESS_LOG_FORMAT

[data]
# CSV file path or http(s) URL
source = "{source}"

# Column holding the country or region name
country_column = "Country or region"

# Column holding the numeric happiness score
score_column = "Score"

[server]
# Host to bind to
host = "127.0.0.1"

# Port to listen on
port = 8050

# Debug mode (verbose logging)
debug = false

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#,
        source = DEFAULT_DATA_SOURCE
    )
}
