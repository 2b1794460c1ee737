//! Application configuration.
//!
//! Resolution order, lowest to highest precedence:
//!
//! 1. Built-in defaults
//! 2. An optional TOML file
//! 3. `GENVISION_*` environment variables
//!
//! The API key itself is never stored here. Only the name of the variable
//! that holds it is, and the client reads it on first use.

use crate::PresentationConfig;
use derive_getters::Getters;
use genvision_error::{ConfigError, GenVisionError, GenVisionResult};
use genvision_models::{
    DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig, RetryConfig,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

/// Where decorative assets live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding `coding.json`, `spinner.json` and `balloon.json`
    dir: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct GenVisionConfig {
    /// Gemini model identifier
    model: String,
    /// Gemini API root
    base_url: String,
    /// Environment variable holding the API key
    api_key_env: String,
    /// Per-request timeout in seconds
    timeout_secs: u64,
    /// Retries for transient upstream failures
    max_retries: usize,
    /// Decorative asset settings
    assets: AssetsConfig,
    /// Page text, styling and animation placement
    presentation: PresentationConfig,
}

impl Default for GenVisionConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: 60,
            max_retries: 3,
            assets: AssetsConfig::default(),
            presentation: PresentationConfig::default(),
        }
    }
}

impl GenVisionConfig {
    /// Load configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> GenVisionResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            GenVisionError::from(ConfigError::new(format!(
                "Failed to read config file: {}",
                e
            )))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> GenVisionResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            GenVisionError::from(ConfigError::new(format!("Failed to parse config: {}", e)))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults, then `path` if given, then the process environment.
    pub fn load(path: Option<&Path>) -> GenVisionResult<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `GENVISION_*` overrides using `lookup` to read variables.
    ///
    /// Recognized: `GENVISION_MODEL`, `GENVISION_BASE_URL`,
    /// `GENVISION_API_KEY_ENV`, `GENVISION_TIMEOUT_SECS`,
    /// `GENVISION_MAX_RETRIES`, `GENVISION_ASSETS_DIR`.
    pub fn with_overrides<F>(mut self, lookup: F) -> GenVisionResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(model) = lookup("GENVISION_MODEL") {
            self.model = model;
        }
        if let Some(base_url) = lookup("GENVISION_BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(api_key_env) = lookup("GENVISION_API_KEY_ENV") {
            self.api_key_env = api_key_env;
        }
        if let Some(raw) = lookup("GENVISION_TIMEOUT_SECS") {
            self.timeout_secs = raw.trim().parse().map_err(|_| {
                ConfigError::new(format!("GENVISION_TIMEOUT_SECS is not a number: {}", raw))
            })?;
        }
        if let Some(raw) = lookup("GENVISION_MAX_RETRIES") {
            self.max_retries = raw.trim().parse().map_err(|_| {
                ConfigError::new(format!("GENVISION_MAX_RETRIES is not a number: {}", raw))
            })?;
        }
        if let Some(dir) = lookup("GENVISION_ASSETS_DIR") {
            self.assets.dir = PathBuf::from(dir);
        }

        self.validate()?;
        debug!(model = %self.model, "Configuration resolved");
        Ok(self)
    }

    /// Replace the model identifier.
    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::new("model must not be empty"));
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::new("base_url must not be empty"));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(ConfigError::new("api_key_env must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::new("timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Client settings derived from this configuration.
    pub fn gemini_config(&self) -> GenVisionResult<GeminiConfig> {
        let retry = RetryConfig {
            max_retries: self.max_retries,
            ..RetryConfig::default()
        };

        GeminiConfig::builder()
            .model(self.model.clone())
            .base_url(self.base_url.clone())
            .api_key_env(self.api_key_env.clone())
            .timeout(Duration::from_secs(self.timeout_secs))
            .retry(retry)
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build client config: {}", e)).into())
    }
}
