//! Model invocation and the full submission chain.

use crate::{build_request_from_input, sanitize};
use genvision_core::{ImageInput, ModelRequest, ModelResponse, SanitizedResponse, UserInput};
use genvision_error::{GenVisionError, GenVisionErrorKind, PipelineError};
use genvision_interface::ModelClient;
use tracing::{debug, error, info, instrument};

/// Sends a request through the client.
///
/// The call is awaited to completion; there is no background scheduling or
/// cancellation.
///
/// # Errors
///
/// Any client failure becomes [`PipelineErrorKind::Upstream`] carrying the
/// client's detail.
///
/// [`PipelineErrorKind::Upstream`]: genvision_error::PipelineErrorKind::Upstream
#[instrument(skip_all, fields(model = client.model_name(), parts = request.len()))]
pub async fn invoke<C>(request: &ModelRequest, client: &C) -> Result<ModelResponse, PipelineError>
where
    C: ModelClient + ?Sized,
{
    match client.generate(request).await {
        Ok(response) => {
            debug!(chars = response.raw_text().len(), "Model responded");
            Ok(response)
        }
        Err(e) => {
            error!(error = %e, "Model call failed");
            Err(PipelineError::upstream(upstream_detail(&e)))
        }
    }
}

// Drop the wrapper prefixes so the message reads well in the UI.
fn upstream_detail(err: &GenVisionError) -> String {
    match err.kind() {
        GenVisionErrorKind::Gemini(e) => e.kind.to_string(),
        GenVisionErrorKind::Pipeline(e) => e.kind.to_string(),
        other => other.to_string(),
    }
}

/// Runs build, invoke, and sanitize for one submission.
///
/// Holds only the client; no state survives between submissions.
///
/// # Examples
///
/// ```no_run
/// use genvision_core::UserInput;
/// use genvision_models::{GeminiClient, GeminiConfig};
/// use genvision_pipeline::Pipeline;
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let pipeline = Pipeline::new(GeminiClient::new(GeminiConfig::default())?);
/// let input = UserInput::new(Some("Tell me a joke".to_string()), None);
/// let response = pipeline.run(input).await?;
/// println!("{}", response.display_text());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline<C> {
    client: C,
}

impl<C: ModelClient> Pipeline<C> {
    /// Creates a pipeline around an explicitly constructed client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Returns the model client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Processes one user submission.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` when the input is empty and `Upstream` when
    /// the model call fails. Both are meant for display to the user.
    #[instrument(skip_all, fields(model = self.client.model_name()))]
    pub async fn run(&self, input: UserInput) -> Result<SanitizedResponse, PipelineError> {
        let request = build_request_from_input(input)?;
        let response = invoke(&request, &self.client).await?;
        let sanitized = sanitize(&response);
        info!(chars = sanitized.display_text().len(), "Submission complete");
        Ok(sanitized)
    }

    /// Processes prompt text and an optional image.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Self::run).
    pub async fn submit(
        &self,
        prompt_text: Option<&str>,
        image: Option<ImageInput>,
    ) -> Result<SanitizedResponse, PipelineError> {
        self.run(UserInput::new(prompt_text.map(str::to_string), image))
            .await
    }
}
