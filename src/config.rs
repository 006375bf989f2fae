// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration management for the provider.
//!
//! Configuration is loaded from multiple sources with the following priority
//! (later sources override earlier ones):
//!
//! 1. Built-in defaults
//! 2. aqt.yaml file
//! 3. Environment variables (AQT_*)
//! 4. CLI arguments

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::{Error, Result};

/// Default AQT portal base URL.
pub const DEFAULT_PORTAL_URL: &str = "https://europe-west3-aqt-portal-dev.cloudfunctions.net";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Provider identity and credential
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Portal HTTP settings
    #[serde(default)]
    pub portal: PortalConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file and environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(path) = config_path {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                config = serde_yaml::from_str(&content)?;
            }
        } else {
            for path in &["aqt.yaml", "aqt.yml"] {
                let path = Path::new(path);
                if path.exists() {
                    let content = std::fs::read_to_string(path)?;
                    config = serde_yaml::from_str(&content)?;
                    break;
                }
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Built-in defaults with environment overrides, without reading any file.
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("AQT_TOKEN") {
            self.provider.access_token = Some(val);
        }
        if let Ok(val) = env::var("AQT_PORTAL_URL") {
            if !val.is_empty() {
                self.provider.portal_url = val;
            }
        }
        if let Ok(val) = env::var("AQT_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = env::var("AQT_PORTAL_TIMEOUT_SEC") {
            if let Ok(secs) = val.parse() {
                self.portal.timeout_sec = secs;
            }
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if self.provider.name.is_empty() {
            return Err(Error::Config("provider name cannot be empty".into()));
        }
        let url = &self.provider.portal_url;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(Error::Config(format!(
                "portal URL must start with http:// or https://, got '{}'",
                url
            )));
        }
        if self.portal.timeout_sec == 0 {
            return Err(Error::Config("portal timeout cannot be 0".into()));
        }
        if !matches!(self.logging.format.as_str(), "json" | "pretty") {
            return Err(Error::Config(format!(
                "unknown log format '{}', expected 'json' or 'pretty'",
                self.logging.format
            )));
        }
        if url.starts_with("http://") {
            tracing::warn!(
                portal_url = %url,
                "Portal URL is not using TLS. The access token is sent in clear text."
            );
        }
        Ok(())
    }
}

/// Provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider instance name
    #[serde(default = "default_provider_name")]
    pub name: String,

    /// Access token issued by AQT. Never written back out.
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,

    /// Portal base URL, without the API suffix
    #[serde(default = "default_portal_url")]
    pub portal_url: String,
}

impl ProviderConfig {
    /// Versioned API root under the portal URL.
    pub fn api_url(&self) -> String {
        format!("{}/api/v1", self.portal_url.trim_end_matches('/'))
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: default_provider_name(),
            access_token: None,
            portal_url: default_portal_url(),
        }
    }
}

fn default_provider_name() -> String {
    "aqt_provider".into()
}

fn default_portal_url() -> String {
    DEFAULT_PORTAL_URL.into()
}

/// Portal HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Request timeout in seconds
    #[serde(default = "default_portal_timeout")]
    pub timeout_sec: u64,

    /// Maximum number of retries for transient errors
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base delay between retries in milliseconds
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            timeout_sec: default_portal_timeout(),
            max_retries: default_max_retries(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
        }
    }
}

fn default_portal_timeout() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_base_delay_ms() -> u64 {
    500
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}
