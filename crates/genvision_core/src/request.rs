//! Model request type.

use crate::{ImageInput, Part};
use derive_getters::Getters;
use genvision_error::{PipelineError, PipelineErrorKind};
use serde::Serialize;

/// An ordered, non-empty sequence of parts sent to the model.
///
/// Text always precedes the image when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ModelRequest {
    /// Parts in send order
    parts: Vec<Part>,
}

impl ModelRequest {
    /// Create a request from parts.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineErrorKind::InvalidRequest`] when `parts` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use genvision_core::{ModelRequest, Part};
    ///
    /// let request = ModelRequest::new(vec![Part::Text("hi".into())]).unwrap();
    /// assert!(request.is_text_only());
    /// assert!(ModelRequest::new(vec![]).is_err());
    /// ```
    #[track_caller]
    pub fn new(parts: Vec<Part>) -> Result<Self, PipelineError> {
        if parts.is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::InvalidRequest));
        }
        Ok(Self { parts })
    }

    /// Prompt text, if the request carries any.
    pub fn text(&self) -> Option<&str> {
        self.parts.iter().find_map(Part::as_text)
    }

    /// Image, if the request carries one.
    pub fn image(&self) -> Option<&ImageInput> {
        self.parts.iter().find_map(Part::as_image)
    }

    /// True when the request carries text and no image.
    pub fn is_text_only(&self) -> bool {
        self.text().is_some() && self.image().is_none()
    }

    /// True when the request carries an image and no text.
    pub fn is_image_only(&self) -> bool {
        self.text().is_none() && self.image().is_some()
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Always false for a constructed request.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
