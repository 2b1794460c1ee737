//! Request parts.

use crate::ImageInput;
use serde::{Deserialize, Serialize};

/// One segment of a multimodal request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Part {
    /// Prompt text
    Text(String),
    /// Uploaded image
    Image(ImageInput),
}

impl Part {
    /// Returns the text if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text(text) => Some(text),
            Part::Image(_) => None,
        }
    }

    /// Returns the image if this is an image part.
    pub fn as_image(&self) -> Option<&ImageInput> {
        match self {
            Part::Image(image) => Some(image),
            Part::Text(_) => None,
        }
    }
}
