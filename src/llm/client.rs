use super::types::{InferenceRequest, InferenceResponse};
use super::{OpenAiCompatClient, WorkersAiClient};
use crate::{
    Result,
    config::{InferenceConfig, InferenceProvider},
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// The hosted inference capability: run `model` on a prompt and return the
/// generated text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn run(&self, model: &str, request: &InferenceRequest) -> Result<InferenceResponse>;
}

/// Builds the backend named by the config, or `None` when no inference
/// section is present.
pub fn create_backend(
    config: Option<&InferenceConfig>,
) -> Result<Option<Arc<dyn InferenceBackend>>> {
    let Some(config) = config else {
        return Ok(None);
    };

    info!(
        "Creating {:?} inference backend at {}",
        config.provider,
        config.base_url()
    );

    let backend: Arc<dyn InferenceBackend> = match config.provider {
        InferenceProvider::WorkersAi => Arc::new(WorkersAiClient::new(config)?),
        InferenceProvider::OpenaiCompat => Arc::new(OpenAiCompatClient::new(config)?),
    };

    Ok(Some(backend))
}
