//! Configuration management for yyzboard.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::flight::FEATURED_AIRLINE;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory under the platform config dir.
const CONFIG_DIR_NAME: &str = "yyzboard";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "YYZBOARD_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `YYZBOARD_`, `__` between levels,
///    e.g. `YYZBOARD_API__KEY`)
/// 2. TOML config file at `~/.config/yyzboard/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upstream flight API settings.
    pub api: ApiConfig,
    /// Board presentation settings.
    pub board: BoardConfig,
}

/// Upstream flight API settings.
///
/// Base URL and key gate whether a live call is attempted at all; the rest
/// are optional.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the flight data provider.
    pub base_url: String,
    /// Value for the `x-rapidapi-host` header. Omitted when blank.
    pub host: String,
    /// Request path. Defaults to `flights` when blank.
    pub path: String,
    /// Value for the `x-rapidapi-key` header.
    pub key: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Board presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Airline pinned to the top of airline lists and flight order.
    pub featured_airline: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            host: String::new(),
            path: String::new(),
            key: String::new(),
            timeout_secs: 10,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            featured_airline: FEATURED_AIRLINE.to_string(),
        }
    }
}

// Hand-written so the key never ends up in logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("host", &self.host)
            .field("path", &self.path)
            .field("key", &self.masked_key())
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ApiConfig {
    /// Whether both the base URL and the key are set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty() && !self.key.trim().is_empty()
    }

    /// The request timeout as a Duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The key with everything but the last four characters hidden.
    #[must_use]
    pub fn masked_key(&self) -> String {
        let key = self.key.trim();
        if key.is_empty() {
            return String::new();
        }
        let chars: Vec<char> = key.chars().collect();
        let visible = chars.len().saturating_sub(4);
        let tail: String = chars[visible..].iter().collect();
        format!("{}{tail}", "*".repeat(visible.max(4)))
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and the environment still
    /// apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.api.timeout_secs == 0 {
            return Err(Error::config_validation(
                "api.timeout_secs must be greater than 0",
            ));
        }

        if self.board.featured_airline.trim().is_empty() {
            return Err(Error::config_validation(
                "board.featured_airline must not be blank",
            ));
        }

        Ok(())
    }
}
