use super::{
    client::InferenceBackend,
    types::{InferenceRequest, InferenceResponse},
};
use crate::{Error, Result, config::InferenceConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use std::time::Duration;
use tracing::debug;

/// Client for OpenAI-compatible chat-completions endpoints, such as
/// Cloudflare's `/ai/v1` compatibility layer.
pub struct OpenAiCompatClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiCompatClient {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.clone())
            .with_api_base(config.base_url());

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        // One attempt per call; a failed completion is reported, never retried.
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        let client = Client::with_config(openai_config)
            .with_http_client(http)
            .with_backoff(no_retry);

        Ok(Self { client })
    }
}

#[async_trait]
impl InferenceBackend for OpenAiCompatClient {
    async fn run(&self, model: &str, request: &InferenceRequest) -> Result<InferenceResponse> {
        debug!(
            "Creating chat completion for {} with {} messages",
            model,
            request.messages.len()
        );

        let messages = request
            .messages
            .iter()
            .map(|msg| msg.to_openai_message())
            .collect::<Result<Vec<_>>>()?;

        let openai_request = openai_types::CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .stream(request.stream)
            .build()?;

        let response = self.client.chat().create(openai_request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let response = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::inference("Chat completion returned no content"))?;

        Ok(InferenceResponse { response })
    }
}
