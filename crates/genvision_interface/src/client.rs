//! Model client trait.

use async_trait::async_trait;
use genvision_core::{ModelRequest, ModelResponse};
use genvision_error::GenVisionResult;
use std::sync::Arc;

/// A hosted multimodal model that turns request parts into text.
///
/// Implementations own authentication and transport. Callers await
/// [`generate`](ModelClient::generate) so one submission blocks until a
/// response or an error arrives.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Model identifier, for logging.
    fn model_name(&self) -> &str;

    /// Send the parts in order and return the model's text.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, an API-reported error, or a
    /// response with no extractable text.
    async fn generate(&self, request: &ModelRequest) -> GenVisionResult<ModelResponse>;
}

#[async_trait]
impl<T: ModelClient + ?Sized> ModelClient for Arc<T> {
    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    async fn generate(&self, request: &ModelRequest) -> GenVisionResult<ModelResponse> {
        (**self).generate(request).await
    }
}

#[async_trait]
impl<T: ModelClient + ?Sized> ModelClient for Box<T> {
    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    async fn generate(&self, request: &ModelRequest) -> GenVisionResult<ModelResponse> {
        (**self).generate(request).await
    }
}
