use super::{
    client::InferenceBackend,
    types::{InferenceRequest, InferenceResult},
};
use std::sync::Arc;
use tracing::{debug, error};

/// Model every chat message is sent to.
pub const MODEL_ID: &str = "@cf/meta/llama-3-8b-instruct";

/// Reply when no inference backend is configured.
pub const UNAVAILABLE_APOLOGY: &str = "Вибачте, AI зараз недоступний. Спробуйте пізніше.";

/// Reply when the backend call fails.
pub const FAILURE_APOLOGY: &str = "Вибачте, сталася помилка при обробці вашого запиту.";

/// Turns a chat message into a displayable reply. Never fails outward: every
/// error is folded into one of the apology strings.
#[derive(Clone)]
pub struct ChatGateway {
    backend: Option<Arc<dyn InferenceBackend>>,
}

impl ChatGateway {
    pub fn new(backend: Option<Arc<dyn InferenceBackend>>) -> Self {
        Self { backend }
    }

    pub fn with_backend(backend: Arc<dyn InferenceBackend>) -> Self {
        Self::new(Some(backend))
    }

    pub fn unavailable() -> Self {
        Self::new(None)
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// One backend call, no retry.
    pub async fn call(&self, message: &str) -> InferenceResult {
        let Some(backend) = &self.backend else {
            return InferenceResult::Unavailable;
        };

        let request = InferenceRequest::single_turn(message);
        match backend.run(MODEL_ID, &request).await {
            Ok(response) => InferenceResult::Success(response.response),
            Err(e) => InferenceResult::Failure(e),
        }
    }

    pub async fn get_reply(&self, message: &str) -> String {
        match self.call(message).await {
            InferenceResult::Success(text) => {
                debug!("Inference succeeded with {} bytes", text.len());
                text
            }
            InferenceResult::Unavailable => {
                error!("Inference backend is not available");
                UNAVAILABLE_APOLOGY.to_string()
            }
            InferenceResult::Failure(e) => {
                error!("Error calling inference backend: {}", e);
                FAILURE_APOLOGY.to_string()
            }
        }
    }
}
