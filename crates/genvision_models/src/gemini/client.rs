//! Gemini REST client.

use crate::gemini::conversions;
use crate::gemini::dto::{GenerateContentRequest, GenerateContentResponse};
use crate::retry::{RetryConfig, retry_with_backoff};
use async_trait::async_trait;
use derive_getters::Getters;
use genvision_core::{ModelRequest, ModelResponse};
use genvision_error::{GeminiError, GeminiErrorKind, GenVisionResult};
use genvision_interface::ModelClient;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// Public Gemini API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Connection settings for [`GeminiClient`].
///
/// The API key is optional here: when unset, it is read from
/// `api_key_env` on every call, so a missing key fails the first request
/// rather than client construction.
#[derive(Debug, Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// API root, without a trailing slash
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Explicit API key, overriding the environment
    #[builder(default, setter(into, strip_option))]
    api_key: Option<String>,
    /// Environment variable consulted when `api_key` is unset
    #[builder(default = "DEFAULT_API_KEY_ENV.to_string()")]
    api_key_env: String,
    /// Per-request timeout
    #[builder(default = "Duration::from_secs(60)")]
    timeout: Duration,
    /// Retry policy for transient failures
    #[builder(default)]
    retry: RetryConfig,
}

impl GeminiConfig {
    /// Creates a new builder for GeminiConfig.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout: Duration::from_secs(60),
            retry: RetryConfig::default(),
        }
    }
}

/// Client for the Gemini `generateContent` endpoint.
///
/// Constructed explicitly and passed to the pipeline; there is no global
/// client state.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::ClientCreation`] if the HTTP client cannot
    /// be built.
    #[instrument(skip(config), fields(model = %config.model))]
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!(
            model = %config.model,
            url = %config.base_url,
            "Created Gemini client"
        );

        Ok(Self { client, config })
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Full URL of the `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn resolve_api_key(&self) -> Result<String, GeminiError> {
        if let Some(key) = &self.config.api_key {
            return Ok(key.clone());
        }
        std::env::var(&self.config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                GeminiError::new(GeminiErrorKind::MissingApiKey(
                    self.config.api_key_env.clone(),
                ))
            })
    }

    /// Sends the request, retrying transient failures, and extracts the text.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, the request fails after
    /// retries, the API reports an error, or the response has no text.
    #[instrument(skip(self, request), fields(model = %self.config.model, parts = request.len()))]
    pub async fn generate_content(
        &self,
        request: &ModelRequest,
    ) -> Result<ModelResponse, GeminiError> {
        let api_key = self.resolve_api_key()?;
        let body = conversions::to_generate_content_request(request);

        let api_key = api_key.as_str();
        let body = &body;
        let response =
            retry_with_backoff(&self.config.retry, move || self.send_once(api_key, body)).await?;

        conversions::from_generate_content_response(&response)
    }

    async fn send_once(
        &self,
        api_key: &str,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = self.endpoint();
        debug!(url = %url, "Sending request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = conversions::api_error_message(&error_text);
            error!(status = %status, error = %message, "API error");

            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GeminiError::new(GeminiErrorKind::ResponseParsing(e.to_string()))
        })?;

        debug!(candidates = parsed.candidates.len(), "Received response");
        Ok(parsed)
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    fn model_name(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, request: &ModelRequest) -> GenVisionResult<ModelResponse> {
        Ok(self.generate_content(request).await?)
    }
}
