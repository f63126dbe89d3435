use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Config file name under `dirs::config_dir()/xfcontacts/`
const CONFIG_FILE: &str = "config.toml";

/// Optional on-disk overrides
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    initial_url: Option<String>,
    loader_delay_ms: Option<u64>,
    seed_path: Option<PathBuf>,
    log_filter: Option<String>,
}

/// Application configuration wrapper.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Defaults, then the user config file if present, then the environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = AppConfig::builder();
        if let Some(path) = Self::default_path().filter(|p| p.exists()) {
            tracing::info!("Loading config from {}", path.display());
            builder = Self::apply_file(builder, &path)?;
        }
        builder = Self::apply_env(builder, |key| std::env::var(key).ok())?;
        Self::with_builder(builder)
    }

    /// `~/.config/xfcontacts/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("xfcontacts").join(CONFIG_FILE))
    }

    fn apply_file(builder: AppConfigBuilder, path: &Path) -> Result<AppConfigBuilder, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::File(format!("{}: {}", path.display(), e)))?;
        Self::apply_toml(builder, &raw)
    }

    fn apply_toml(mut builder: AppConfigBuilder, raw: &str) -> Result<AppConfigBuilder, ConfigError> {
        let file: FileConfig = toml::from_str(raw).map_err(|e| ConfigError::File(e.to_string()))?;
        if let Some(url) = file.initial_url {
            builder = builder.initial_url(url);
        }
        if let Some(ms) = file.loader_delay_ms {
            builder = builder.loader_delay(Duration::from_millis(ms));
        }
        if let Some(path) = file.seed_path {
            builder = builder.seed_path(path);
        }
        if let Some(filter) = file.log_filter {
            builder = builder.log_filter(filter);
        }
        Ok(builder)
    }

    fn apply_env(
        mut builder: AppConfigBuilder,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<AppConfigBuilder, ConfigError> {
        if let Some(url) = var("CONTACTS_INITIAL_URL") {
            builder = builder.initial_url(url);
        }
        if let Some(raw) = var("CONTACTS_LOADER_DELAY_MS") {
            let ms = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: "CONTACTS_LOADER_DELAY_MS",
                value: raw.clone(),
            })?;
            builder = builder.loader_delay(Duration::from_millis(ms));
        }
        if let Some(path) = var("CONTACTS_SEED") {
            builder = builder.seed_path(path);
        }
        if let Some(filter) = var("RUST_LOG") {
            builder = builder.log_filter(filter);
        }
        Ok(builder)
    }

    pub fn initial_url(&self) -> &str {
        &self.app.initial_url
    }

    pub fn loader_delay(&self) -> Duration {
        self.app.loader_delay
    }

    pub fn seed_path(&self) -> Option<&Path> {
        self.app.seed_path.as_deref()
    }

    pub fn log_filter(&self) -> &str {
        &self.app.log_filter
    }
}
