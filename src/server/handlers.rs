use super::types::InboundMessage;
use crate::llm::ChatGateway;
use axum::{extract::State, response::Html};
use std::sync::Arc;
use tracing::info;

/// Chat page served for every non-POST request.
pub const CHAT_PAGE: &str = include_str!("../../static/index.html");

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<ChatGateway>,
}

impl AppState {
    pub fn new(gateway: ChatGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}

pub async fn index() -> Html<&'static str> {
    Html(CHAT_PAGE)
}

/// Always answers 200 with plain text, even when inference fails.
pub async fn chat(
    State(state): State<AppState>,
    InboundMessage(message): InboundMessage,
) -> String {
    info!("Received chat message of {} bytes", message.len());

    state.gateway.get_reply(&message).await
}
