//! Google Gemini client.

mod client;
mod conversions;
mod dto;

pub use client::{
    DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, GeminiConfig,
    GeminiConfigBuilder,
};
pub use dto::{GenerateContentRequest, GenerateContentResponse};
