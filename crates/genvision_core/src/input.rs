//! Raw user input as supplied by the presentation layer.

use crate::ImageInput;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// What the user typed and uploaded for one submission.
///
/// Either field may be empty, but generation must not be invoked when both
/// are.
///
/// # Examples
///
/// ```
/// use genvision_core::UserInput;
///
/// let input = UserInput::new(Some("Describe this".to_string()), None);
/// assert!(!input.is_empty());
///
/// let blank = UserInput::new(Some(String::new()), None);
/// assert!(blank.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct UserInput {
    /// Prompt text, if any
    prompt_text: Option<String>,
    /// Uploaded image, if any
    image: Option<ImageInput>,
}

impl UserInput {
    /// Create user input from optional prompt text and an optional image.
    pub fn new(prompt_text: Option<String>, image: Option<ImageInput>) -> Self {
        Self { prompt_text, image }
    }

    /// Prompt text as typed, `None` when absent or empty.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt_text.as_deref().filter(|text| !text.is_empty())
    }

    /// True when there is nothing to send.
    pub fn is_empty(&self) -> bool {
        self.prompt().is_none() && self.image.is_none()
    }

    /// Split into prompt text and image.
    pub fn into_parts(self) -> (Option<String>, Option<ImageInput>) {
        (self.prompt_text, self.image)
    }
}
