//! Decorative asset loading error types.
//!
//! These never reach the request/response pipeline; callers log them and
//! skip the decorative step.

/// Reasons an animation asset could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AssetLoadErrorKind {
    /// No file at the given path
    #[display("asset not found: {}", _0)]
    NotFound(String),
    /// File exists but could not be read
    #[display("failed to read asset: {}", _0)]
    Io(String),
    /// Content is not valid UTF-8
    #[display("asset is not valid UTF-8: {}", _0)]
    Encoding(String),
    /// Content is not valid JSON
    #[display("malformed asset: {}", _0)]
    Malformed(String),
    /// Remote fetch failed
    #[display("failed to fetch asset: {}", _0)]
    Http(String),
}

/// Asset load error with source location tracking.
#[derive(Debug, Clone)]
pub struct AssetLoadError {
    /// The kind of error that occurred
    pub kind: AssetLoadErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl AssetLoadError {
    /// Create a new AssetLoadError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: AssetLoadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Asset Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for AssetLoadError {}
