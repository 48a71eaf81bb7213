use async_trait::async_trait;
use chat_relay::{
    Error, Result,
    llm::{InferenceBackend, InferenceRequest, InferenceResponse},
};
use std::sync::{Arc, Mutex};

/// A recorded `run` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub model: String,
    pub request: InferenceRequest,
}

/// Mock inference backend for testing
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    pub reply: String,
    pub error: Option<String>,
}

impl MockBackend {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            ..Self::default()
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::default()
        }
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceBackend for MockBackend {
    async fn run(&self, model: &str, request: &InferenceRequest) -> Result<InferenceResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.to_string(),
            request: request.clone(),
        });

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        Ok(InferenceResponse {
            response: self.reply.clone(),
        })
    }
}
