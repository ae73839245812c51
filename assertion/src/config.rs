use std::path::Path;

use figment::{
    providers::{Data, Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Client assertion configuration loaded from multiple sources.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. config.yaml file (if exists)
/// 3. Environment variables with CA_ prefix (always wins)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub assertion: AssertionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssertionConfig {
    /// Authorization server the assertion is addressed to (required).
    #[serde(default)]
    pub audience: String,

    /// Client identifier, sent as both issuer and subject (required).
    #[serde(default)]
    pub client_id: String,

    /// Seconds between `iat` and `exp`.
    /// Signed so that a negative value can be reported instead of failing to parse.
    #[serde(default = "default_validity_seconds")]
    pub validity_seconds: i64,
}

impl AssertionConfig {
    /// Validity window as an unsigned number of seconds.
    ///
    /// # Errors
    /// Returns `ConfigError::Validation` if the window is negative.
    pub fn validity(&self) -> Result<u64, ConfigError> {
        u64::try_from(self.validity_seconds).map_err(|_| {
            ConfigError::Validation(format!(
                "assertion.validity_seconds must not be negative, got: {}",
                self.validity_seconds
            ))
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// These functions cannot be const because serde uses function pointers for defaults
#[allow(clippy::missing_const_for_fn)]
fn default_validity_seconds() -> i64 {
    300 // 5 minutes
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assertion: AssertionConfig {
                audience: String::new(),
                client_id: String::new(),
                validity_seconds: default_validity_seconds(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Sources are merged in priority order:
    /// 1. Struct defaults (lowest)
    /// 2. config.yaml file (if exists)
    /// 3. Environment variables with CA_ prefix (highest)
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(Yaml::file("config.yaml"))
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// Unlike [`Config::load`], the named file must exist.
    ///
    /// # Errors
    /// Returns an error if the file is missing, or if configuration cannot be
    /// loaded or is invalid.
    pub fn load_from(yaml_path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with(Yaml::file(yaml_path.as_ref()).required(true))
    }

    fn load_with(yaml: Data<Yaml>) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(yaml)
            .merge(Env::prefixed("CA_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.assertion.audience.trim().is_empty() {
            return Err(ConfigError::Validation(
                "assertion.audience is required. Set CA_ASSERTION__AUDIENCE environment variable or configure in config.yaml.".into(),
            ));
        }

        if self.assertion.client_id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "assertion.client_id is required. Set CA_ASSERTION__CLIENT_ID environment variable or configure in config.yaml.".into(),
            ));
        }

        self.assertion.validity()?;

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation("logging.level cannot be empty".into()));
        }

        Ok(())
    }
}
