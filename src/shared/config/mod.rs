//! Application configuration module
//!
//! Provides the validated configuration values the app starts from. The egui
//! wrapper in `egui_app::config` layers file and environment sources on top.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Location the app opens at when nothing else is configured
pub const DEFAULT_INITIAL_URL: &str = "/";

/// Artificial loader latency so the loading indicators are visible
pub const DEFAULT_LOADER_DELAY_MS: u64 = 300;

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Location loaded on startup (path plus optional search string)
    pub initial_url: String,
    /// Delay applied to every background loader run
    pub loader_delay: Duration,
    /// Optional JSON file with the contacts to seed the store with
    pub seed_path: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_url: DEFAULT_INITIAL_URL.to_string(),
            loader_delay: Duration::from_millis(DEFAULT_LOADER_DELAY_MS),
            seed_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_url.starts_with('/') {
            return Err(ConfigError::InvalidUrl(self.initial_url.clone()));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::MissingValue("log_filter"));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default, Clone)]
pub struct AppConfigBuilder {
    initial_url: Option<String>,
    loader_delay: Option<Duration>,
    seed_path: Option<PathBuf>,
    log_filter: Option<String>,
}

impl AppConfigBuilder {
    /// Set the location to open on startup
    pub fn initial_url(mut self, url: impl Into<String>) -> Self {
        self.initial_url = Some(url.into());
        self
    }

    /// Set the background loader delay
    pub fn loader_delay(mut self, delay: Duration) -> Self {
        self.loader_delay = Some(delay);
        self
    }

    /// Set the JSON seed file
    pub fn seed_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_path = Some(path.into());
        self
    }

    /// Set the tracing filter
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            initial_url: self.initial_url.unwrap_or(defaults.initial_url),
            loader_delay: self.loader_delay.unwrap_or(defaults.loader_delay),
            seed_path: self.seed_path,
            log_filter: self.log_filter.unwrap_or(defaults.log_filter),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to read config file: {0}")]
    File(String),
}
