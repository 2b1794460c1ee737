//! Output clean-up before embedding model text in markup.
//!
//! This is a narrow fix-up for a stray closing tag at the end of the text,
//! not general HTML sanitization. Any other markup passes through untouched.

use genvision_core::{ModelResponse, SanitizedResponse};
use regex::Regex;
use std::sync::LazyLock;

static TRAILING_CLOSING_DIV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</div>\s*$").expect("valid trailing tag pattern"));

/// Trims the text and strips one trailing `</div>`.
///
/// # Examples
///
/// ```
/// use genvision_pipeline::sanitize_text;
///
/// assert_eq!(sanitize_text("  hello world </DIV>  "), "hello world");
/// assert_eq!(sanitize_text("hello </div> world"), "hello </div> world");
/// assert_eq!(sanitize_text(""), "");
/// ```
pub fn sanitize_text(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = TRAILING_CLOSING_DIV.replace(trimmed, "");
    // Whitespace left between the text and the removed tag.
    stripped.trim_end().to_string()
}

/// Sanitizes a model response for display.
pub fn sanitize(response: &ModelResponse) -> SanitizedResponse {
    SanitizedResponse::new(sanitize_text(response.raw_text()))
}
