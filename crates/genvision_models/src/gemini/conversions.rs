//! Type conversions between GenVision and Gemini formats.

use crate::gemini::dto::{
    ApiErrorEnvelope, Content, ContentPart, GenerateContentRequest, GenerateContentResponse,
    InlineData,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use genvision_core::{MediaSource, ModelRequest, ModelResponse, Part};
use genvision_error::{GeminiError, GeminiErrorKind};

/// Converts a request into a single user turn, preserving part order.
pub fn to_generate_content_request(request: &ModelRequest) -> GenerateContentRequest {
    let parts = request
        .parts()
        .iter()
        .map(|part| match part {
            Part::Text(text) => ContentPart::Text { text: text.clone() },
            Part::Image(image) => {
                let data = match image.source() {
                    MediaSource::Base64(encoded) => encoded.clone(),
                    MediaSource::Binary(bytes) => STANDARD.encode(bytes),
                };
                ContentPart::InlineData {
                    inline_data: InlineData {
                        mime_type: image.mime().clone(),
                        data,
                    },
                }
            }
        })
        .collect();

    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts,
        }],
    }
}

/// Extracts the text of the first candidate.
///
/// Text parts are concatenated in order; non-text parts are ignored.
pub fn from_generate_content_response(
    response: &GenerateContentResponse,
) -> Result<ModelResponse, GeminiError> {
    let Some(candidate) = response.candidates.first() else {
        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.clone())
        {
            return Err(GeminiError::new(GeminiErrorKind::Blocked(reason)));
        }
        return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
    };

    let text: String = candidate
        .content
        .iter()
        .flat_map(|content| content.parts.iter())
        .filter_map(|part| match part {
            ContentPart::Text { text } => Some(text.as_str()),
            ContentPart::InlineData { .. } | ContentPart::Other(_) => None,
        })
        .collect();

    if text.is_empty() {
        return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
    }

    Ok(ModelResponse::new(text))
}

/// Pulls the message out of an error body, falling back to the raw text.
pub fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(status) => format!("{} ({})", envelope.error.message, status),
            None => envelope.error.message,
        },
        Err(_) => body.to_string(),
    }
}
