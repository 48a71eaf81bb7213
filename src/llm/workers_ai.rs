use super::{
    client::InferenceBackend,
    types::{InferenceRequest, InferenceResponse},
};
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Client for the Cloudflare Workers AI REST API
/// (`POST /accounts/{account_id}/ai/run/{model}`).
pub struct WorkersAiClient {
    http: reqwest::Client,
    base_url: String,
    account_id: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    errors: Vec<ApiMessage>,
    #[serde(default)]
    result: Option<RunResult>,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct RunResult {
    #[serde(default)]
    response: Option<String>,
}

impl WorkersAiClient {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let account_id = config
            .account_id
            .clone()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::config("Workers AI provider requires inference.account_id"))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            account_id,
            api_key: config.api_key.clone(),
        })
    }

    fn run_url(&self, model: &str) -> String {
        format!(
            "{}/accounts/{}/ai/run/{}",
            self.base_url, self.account_id, model
        )
    }
}

fn describe_errors(errors: &[ApiMessage]) -> String {
    if errors.is_empty() {
        return "no error details".to_string();
    }
    errors
        .iter()
        .map(|e| format!("{} ({})", e.message, e.code))
        .collect::<Vec<_>>()
        .join("; ")
}

#[async_trait]
impl InferenceBackend for WorkersAiClient {
    async fn run(&self, model: &str, request: &InferenceRequest) -> Result<InferenceResponse> {
        debug!(
            "Running Workers AI model {} with {} messages",
            model,
            request.messages.len()
        );

        let response = self
            .http
            .post(self.run_url(model))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let details = serde_json::from_str::<Envelope>(&body)
                .map(|envelope| describe_errors(&envelope.errors))
                .unwrap_or(body);
            return Err(Error::inference(format!(
                "Workers AI returned {}: {}",
                status, details
            )));
        }

        let envelope: Envelope = serde_json::from_str(&body)?;
        if !envelope.success {
            return Err(Error::inference(format!(
                "Workers AI reported failure: {}",
                describe_errors(&envelope.errors)
            )));
        }

        let response = envelope
            .result
            .and_then(|result| result.response)
            .ok_or_else(|| Error::inference("Workers AI result has no response field"))?;

        debug!("Received Workers AI response of {} bytes", response.len());

        Ok(InferenceResponse { response })
    }
}
