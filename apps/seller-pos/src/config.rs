//! # POS Configuration
//!
//! Configuration for the seller POS: where the commerce API lives and how
//! amounts are displayed.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SOUK_API_BASE_URL=https://market.example.com/api/v1/seller         │
//! │     SOUK_API_TOKEN=...                                                 │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/souk-pos/pos.toml (Linux)                                │
//! │     ~/Library/Application Support/com.souk.pos/pos.toml (macOS)        │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [api]
//! base_url = "https://market.example.com/api/v1/seller"
//! timeout_secs = 15
//! auth_token = "..."
//!
//! [display]
//! currency_symbol = "$"
//! currency_decimals = 2
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Result type alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for [`PosConfig`].
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// API Settings
// =============================================================================

/// Commerce API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL all seller endpoints hang off.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Bearer token for the seller session.
    #[serde(default)]
    pub auth_token: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:8000/api/v1/seller".to_string()
}

fn default_timeout() -> u64 {
    15
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            auth_token: None,
        }
    }
}

// =============================================================================
// Display Settings
// =============================================================================

/// How amounts are rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Currency symbol (for display)
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Number of decimal places for currency
    #[serde(default = "default_currency_decimals")]
    pub currency_decimals: u8,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_currency_decimals() -> u8 {
    2
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: default_currency_symbol(),
            currency_decimals: default_currency_decimals(),
        }
    }
}

// =============================================================================
// Main POS Configuration
// =============================================================================

/// Complete POS configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PosConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl PosConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (pos.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading POS config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load POS config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let url = url::Url::parse(&self.api.base_url)
            .map_err(|e| ConfigError::Invalid(format!("api.base_url: {}", e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "api.base_url must be http or https, got: {}",
                url.scheme()
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "api.timeout_secs must be greater than 0".into(),
            ));
        }

        if self.display.currency_decimals > 6 {
            return Err(ConfigError::Invalid(
                "display.currency_decimals must be at most 6".into(),
            ));
        }

        Ok(())
    }

    /// Applies `SOUK_*` overrides read through `lookup`.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("SOUK_API_BASE_URL") {
            debug!(url = %url, "Overriding API base URL from environment");
            self.api.base_url = url;
        }

        if let Some(token) = lookup("SOUK_API_TOKEN") {
            self.api.auth_token = Some(token);
        }

        if let Some(timeout) = lookup("SOUK_API_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "Ignoring invalid SOUK_API_TIMEOUT_SECS"),
            }
        }

        if let Some(symbol) = lookup("SOUK_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }

        if let Some(decimals) = lookup("SOUK_CURRENCY_DECIMALS") {
            match decimals.parse::<u8>() {
                Ok(d) => self.display.currency_decimals = d,
                Err(_) => warn!(value = %decimals, "Ignoring invalid SOUK_CURRENCY_DECIMALS"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "souk", "pos")
            .map(|dirs| dirs.config_dir().join("pos.toml"))
    }

    /// Formats an amount with the configured currency.
    ///
    /// ## Example
    /// ```rust
    /// use souk_pos::config::PosConfig;
    ///
    /// let config = PosConfig::default();
    /// assert_eq!(config.format_amount(1234.5), "$1234.50");
    /// ```
    pub fn format_amount(&self, value: f64) -> String {
        souk_core::amount::format_amount(
            value,
            &self.display.currency_symbol,
            self.display.currency_decimals,
        )
    }
}
