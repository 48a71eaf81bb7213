use crate::Error;
use async_openai::types::{ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: String,
}

/// Payload handed to an inference backend, in the Workers AI `run` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub messages: Vec<PromptMessage>,
    pub stream: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceResponse {
    pub response: String,
}

/// Outcome of one gateway call.
#[derive(Debug)]
pub enum InferenceResult {
    Success(String),
    /// No backend was configured, so no call was attempted.
    Unavailable,
    Failure(Error),
}

impl PromptMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn to_openai_message(&self) -> Result<ChatCompletionRequestMessage, Error> {
        // Prompts are single-turn, so only user messages are ever sent.
        match self.role.as_str() {
            "user" => Ok(ChatCompletionRequestUserMessageArgs::default()
                .content(self.content.clone())
                .build()?
                .into()),
            _ => Err(Error::inference(format!(
                "Unknown message role: {}",
                self.role
            ))),
        }
    }
}

impl InferenceRequest {
    /// A single-turn, non-streaming prompt.
    pub fn single_turn(message: impl Into<String>) -> Self {
        Self {
            messages: vec![PromptMessage::user(message)],
            stream: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_single_turn_request_wire_shape() {
        let request = InferenceRequest::single_turn("Hello");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "messages": [{"role": "user", "content": "Hello"}],
                "stream": false
            })
        );
    }

    #[test]
    fn test_user_message_to_openai() {
        let msg = PromptMessage::user("Hello, how are you?");

        let openai_msg = msg.to_openai_message().unwrap();
        assert!(matches!(openai_msg, ChatCompletionRequestMessage::User(_)));
    }

    #[test]
    fn test_system_role_is_not_mapped() {
        let msg = PromptMessage {
            role: "system".to_string(),
            content: "You are a helpful assistant".to_string(),
        };

        assert!(msg.to_openai_message().is_err());
    }

    #[test]
    fn test_invalid_role_is_rejected() {
        let msg = PromptMessage {
            role: "invalid_role".to_string(),
            content: "This should fail".to_string(),
        };

        let result = msg.to_openai_message();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Unknown message role")
        );
    }
}
