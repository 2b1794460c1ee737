//! Request construction from raw user input.

use genvision_core::{ImageInput, ModelRequest, Part, UserInput};
use genvision_error::{PipelineError, PipelineErrorKind};
use tracing::{debug, instrument};

/// Builds a model request, omitting empty fields.
///
/// Empty prompt text is omitted and non-empty text is sent as given; the
/// image is included whenever present. Text precedes the image.
///
/// # Errors
///
/// Returns [`PipelineErrorKind::InvalidRequest`] when there is no prompt
/// text and no image.
///
/// # Examples
///
/// ```
/// use genvision_pipeline::build_request;
///
/// let request = build_request(Some("What is in this picture?"), None).unwrap();
/// assert!(request.is_text_only());
///
/// assert!(build_request(Some(""), None).is_err());
/// ```
#[instrument(skip_all, fields(has_prompt = tracing::field::Empty, has_image = image.is_some()))]
pub fn build_request(
    prompt_text: Option<&str>,
    image: Option<ImageInput>,
) -> Result<ModelRequest, PipelineError> {
    let prompt = prompt_text.filter(|text| !text.is_empty());
    tracing::Span::current().record("has_prompt", prompt.is_some());

    let mut parts = Vec::with_capacity(2);
    if let Some(text) = prompt {
        parts.push(Part::Text(text.to_string()));
    }
    if let Some(image) = image {
        parts.push(Part::Image(image));
    }

    if parts.is_empty() {
        debug!("Nothing to send");
        return Err(PipelineError::new(PipelineErrorKind::InvalidRequest));
    }

    debug!(parts = parts.len(), "Built model request");
    ModelRequest::new(parts)
}

/// Builds a model request from a [`UserInput`].
///
/// # Errors
///
/// Same as [`build_request`].
pub fn build_request_from_input(input: UserInput) -> Result<ModelRequest, PipelineError> {
    let (prompt_text, image) = input.into_parts();
    build_request(prompt_text.as_deref(), image)
}
