//! Errors raised while loading settings.
//!
//! Covers the TOML file, `GENVISION_*` environment overrides, the Gemini
//! client configuration builder, and installing the tracing subscriber.

/// A setting could not be read or failed validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// What was wrong, naming the offending key where there is one
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Record a configuration problem at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use genvision_error::ConfigError;
    ///
    /// let err = ConfigError::new("GENVISION_TIMEOUT_SECS must be a positive integer");
    /// assert!(err.message.starts_with("GENVISION_TIMEOUT_SECS"));
    /// assert!(err.to_string().contains("GenVision config error"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GenVision config error: {} (at {}:{})",
            self.message, self.file, self.line
        )
    }
}

impl std::error::Error for ConfigError {}
