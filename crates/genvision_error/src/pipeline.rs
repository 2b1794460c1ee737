//! Request/response pipeline error types.

/// Failures surfaced by the request/response pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Neither prompt text nor an image was supplied
    #[display("Invalid request: no prompt text and no image supplied")]
    InvalidRequest,
    /// The model client failed or returned no usable text
    #[display("Upstream error: {}", _0)]
    Upstream(String),
}

/// Pipeline error with source location tracking.
///
/// # Examples
///
/// ```
/// use genvision_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::InvalidRequest);
/// assert!(err.is_invalid_request());
/// assert!(format!("{}", err).contains("no prompt text"));
/// ```
#[derive(Debug, Clone)]
pub struct PipelineError {
    /// The kind of error that occurred
    pub kind: PipelineErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for an upstream failure carrying the client's detail.
    #[track_caller]
    pub fn upstream(detail: impl Into<String>) -> Self {
        Self::new(PipelineErrorKind::Upstream(detail.into()))
    }

    /// True when the caller should re-prompt the user instead of reporting a failure.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self.kind, PipelineErrorKind::InvalidRequest)
    }
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pipeline Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for PipelineError {}
