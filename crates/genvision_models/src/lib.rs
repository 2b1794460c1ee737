//! Model provider integrations for GenVision.
//!
//! Currently a single provider: Google Gemini over its REST
//! `generateContent` endpoint.

mod gemini;
mod retry;

pub use gemini::{
    DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, GeminiConfig,
    GeminiConfigBuilder, GenerateContentRequest, GenerateContentResponse,
};
pub use retry::{RetryConfig, retry_with_backoff};
