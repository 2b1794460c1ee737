//! Tests for request building and the end-to-end pipeline.

use async_trait::async_trait;
use genvision_core::{
    ImageFormat, ImageInput, ModelRequest, ModelResponse, Part, UserInput,
};
use genvision_error::{
    GeminiError, GeminiErrorKind, GenVisionResult, PipelineErrorKind,
};
use genvision_interface::ModelClient;
use genvision_pipeline::{Pipeline, build_request, invoke};
use std::sync::Mutex;

/// Returns a fixed reply and records every request it sees.
struct StubClient {
    reply: Result<String, GeminiErrorKind>,
    seen: Mutex<Vec<ModelRequest>>,
}

impl StubClient {
    fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn failing(kind: GeminiErrorKind) -> Self {
        Self {
            reply: Err(kind),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelClient for StubClient {
    fn model_name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, request: &ModelRequest) -> GenVisionResult<ModelResponse> {
        self.seen.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(text) => Ok(ModelResponse::new(text.clone())),
            Err(kind) => Err(GeminiError::new(kind.clone()).into()),
        }
    }
}

fn cat_photo() -> ImageInput {
    ImageInput::from_bytes(ImageFormat::Jpeg, vec![0xFF, 0xD8, 0xFF, 0xE0])
}

#[test]
fn test_text_only_request() {
    let request = build_request(Some("Tell me about Rust"), None).unwrap();
    assert_eq!(request.parts(), &vec![Part::Text("Tell me about Rust".into())]);
    assert!(request.is_text_only());
}

#[test]
fn test_prompt_text_sent_verbatim() {
    for prompt in ["   ", "  hi  ", "\n"] {
        let request = build_request(Some(prompt), None).unwrap();
        assert_eq!(request.parts(), &vec![Part::Text(prompt.to_string())]);
        assert!(request.is_text_only());
    }

    let request = build_request(Some("  hi  "), Some(cat_photo())).unwrap();
    assert_eq!(request.text(), Some("  hi  "));
    assert_eq!(request.len(), 2);
}

#[test]
fn test_image_only_request() {
    for prompt in [None, Some("")] {
        let request = build_request(prompt, Some(cat_photo())).unwrap();
        assert_eq!(request.len(), 1);
        assert!(request.is_image_only());
    }
}

#[test]
fn test_text_and_image_request_orders_text_first() {
    let request = build_request(Some("Describe this"), Some(cat_photo())).unwrap();
    assert_eq!(
        request.parts(),
        &vec![Part::Text("Describe this".into()), Part::Image(cat_photo())]
    );
}

#[test]
fn test_empty_request_is_invalid() {
    let err = build_request(Some(""), None).unwrap_err();
    assert_eq!(err.kind, PipelineErrorKind::InvalidRequest);

    let err = build_request(None, None).unwrap_err();
    assert!(err.is_invalid_request());
}

#[tokio::test]
async fn test_end_to_end_strips_trailing_div() {
    let pipeline = Pipeline::new(StubClient::replying("A cat.</div>\n"));
    let response = pipeline
        .submit(Some("Describe this"), Some(cat_photo()))
        .await
        .unwrap();

    assert_eq!(response.display_text(), "A cat.");

    let seen = pipeline.client().seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].text(), Some("Describe this"));
    assert!(seen[0].image().is_some());
}

#[tokio::test]
async fn test_invalid_input_never_reaches_client() {
    let pipeline = Pipeline::new(StubClient::replying("unused"));
    let err = pipeline.run(UserInput::default()).await.unwrap_err();
    assert!(err.is_invalid_request());
    assert_eq!(pipeline.client().calls(), 0);
}

#[tokio::test]
async fn test_client_failure_becomes_upstream_error() {
    let client = StubClient::failing(GeminiErrorKind::HttpError {
        status_code: 500,
        message: "internal".into(),
    });
    let request = build_request(Some("hi"), None).unwrap();

    let err = invoke(&request, &client).await.unwrap_err();
    assert_eq!(
        err.kind,
        PipelineErrorKind::Upstream("HTTP 500 error: internal".into())
    );
}

#[tokio::test]
async fn test_missing_key_surfaces_as_upstream_error() {
    let pipeline = Pipeline::new(StubClient::failing(GeminiErrorKind::MissingApiKey(
        "GOOGLE_API_KEY".into(),
    )));
    let err = pipeline.submit(Some("hi"), None).await.unwrap_err();
    match err.kind {
        PipelineErrorKind::Upstream(detail) => assert!(detail.contains("GOOGLE_API_KEY")),
        other => panic!("expected upstream error, got {}", other),
    }
}

#[tokio::test]
async fn test_pipeline_accepts_boxed_client() {
    let client: Box<dyn ModelClient> = Box::new(StubClient::replying("  plain text  "));
    let pipeline = Pipeline::new(client);
    let response = pipeline.submit(Some("hi"), None).await.unwrap();
    assert_eq!(response.display_text(), "plain text");
}
