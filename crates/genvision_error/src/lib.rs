//! Error types for the GenVision library.
//!
//! Each concern gets its own error struct with source location tracking.
//! [`GenVisionError`] wraps all of them so crates can share a single
//! [`GenVisionResult`] alias.

mod asset;
mod config;
mod gemini;
mod pipeline;

pub use asset::{AssetLoadError, AssetLoadErrorKind};
pub use config::ConfigError;
pub use gemini::{GeminiError, GeminiErrorKind, RetryableError};
pub use pipeline::{PipelineError, PipelineErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum GenVisionErrorKind {
    /// Configuration error
    Config(ConfigError),
    /// Gemini API error
    Gemini(GeminiError),
    /// Request/response pipeline error
    Pipeline(PipelineError),
    /// Decorative asset error
    Asset(AssetLoadError),
}

impl std::fmt::Display for GenVisionErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenVisionErrorKind::Config(e) => write!(f, "{}", e),
            GenVisionErrorKind::Gemini(e) => write!(f, "{}", e),
            GenVisionErrorKind::Pipeline(e) => write!(f, "{}", e),
            GenVisionErrorKind::Asset(e) => write!(f, "{}", e),
        }
    }
}

/// GenVision error with kind discrimination.
#[derive(Debug)]
pub struct GenVisionError(Box<GenVisionErrorKind>);

impl GenVisionError {
    /// Create a new error from a kind.
    pub fn new(kind: GenVisionErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenVisionErrorKind {
        &self.0
    }
}

impl std::fmt::Display for GenVisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GenVision Error: {}", self.0)
    }
}

impl std::error::Error for GenVisionError {}

// Generic From implementation for any type that converts to GenVisionErrorKind
impl<T> From<T> for GenVisionError
where
    T: Into<GenVisionErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for GenVision operations.
pub type GenVisionResult<T> = std::result::Result<T, GenVisionError>;
