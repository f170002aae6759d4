//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `madtrans.toml` (or an explicit file), then `MADTRANS_*` environment
//! variables using `__` between nested keys, e.g.
//! `MADTRANS_EMT__TIMEOUT_SECS=20`.

use std::path::{Path, PathBuf};

use integration_emt::EmtConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The values loaded but do not make sense together
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Root configuration of the madtrans process
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// EMT openbus client settings
    #[serde(default)]
    pub emt: EmtConfig,

    /// Locale defaults
    #[serde(default)]
    pub locale: LocaleConfig,

    /// User profile source
    #[serde(default)]
    pub users: UsersConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Locale configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Locale tag used when a sender has no preference (`en`, `es`, ...)
    #[serde(default = "default_locale")]
    pub default: String,
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default: default_locale(),
        }
    }
}

/// Where per-user preferences come from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsersConfig {
    /// TOML file mapping identities to `{ locale = "es" }` tables
    ///
    /// Without a file every sender gets the default locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles_path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from `madtrans.toml` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source is unreadable or the result is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default file
    ///
    /// An explicit path must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is unreadable or the result is invalid.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("madtrans").required(false),
        };

        let builder = config::Config::builder()
            .set_default("locale.default", default_locale())?
            .set_default("logging.level", default_log_level())?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("MADTRANS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.emt
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("emt: {e}")))?;

        if self.locale.default.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "locale.default must not be empty".to_string(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "logging.level must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
