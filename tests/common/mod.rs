#![allow(dead_code)]

pub mod mocks;

use axum::Router;
use chat_relay::{
    llm::ChatGateway,
    server::{handlers::AppState, router},
};
use mocks::MockBackend;
use std::sync::Arc;

pub fn app_with_backend(backend: &MockBackend) -> Router {
    router(AppState::new(ChatGateway::with_backend(Arc::new(
        backend.clone(),
    ))))
}

pub fn app_without_backend() -> Router {
    router(AppState::new(ChatGateway::unavailable()))
}
