//! GenVision: a multimodal vision assistant.
//!
//! Submit a prompt, an image, or both to a hosted Gemini model and get back
//! text that is safe to drop into an HTML container.
//!
//! This crate ties the workspace together: configuration, image loading,
//! the presentation layer, and re-exports of the pipeline and client types.

mod config;
mod image;
mod presentation;

pub use config::{AssetsConfig, GenVisionConfig};
pub use image::load_image;
pub use presentation::{
    ContainerStyle, PageContent, PresentationConfig, SuccessAnimationPlacement, escape_html,
    render_page, render_response,
};

pub use genvision_assets::{Animation, AnimationKind, AnimationSet};
pub use genvision_core::{
    ImageFormat, ImageInput, MediaSource, ModelRequest, ModelResponse, Part, SanitizedResponse,
    UserInput, init_tracing,
};
pub use genvision_error::{
    GenVisionError, GenVisionErrorKind, GenVisionResult, PipelineError, PipelineErrorKind,
};
pub use genvision_interface::ModelClient;
pub use genvision_models::{GeminiClient, GeminiConfig, RetryConfig};
pub use genvision_pipeline::{Pipeline, build_request, invoke, sanitize, sanitize_text};
