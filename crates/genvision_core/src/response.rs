//! Model response types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Raw text returned by the model. Untrusted; may contain markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ModelResponse {
    raw_text: String,
}

impl ModelResponse {
    /// Wrap raw model text.
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }
}

/// Model text that is safe to embed inside a caller-supplied container.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_more::Display,
)]
#[display("{display_text}")]
pub struct SanitizedResponse {
    display_text: String,
}

impl SanitizedResponse {
    /// Wrap already-sanitized text.
    pub fn new(display_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
        }
    }

    /// Consume into the display text.
    pub fn into_display_text(self) -> String {
        self.display_text
    }
}
