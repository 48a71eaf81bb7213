pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    llm::{ChatGateway, create_backend},
};
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use handlers::AppState;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Every path answers POST with a chat reply and every other method with the
/// page. Request bodies are not size-limited, so long messages reach the model.
pub fn router(state: AppState) -> Router {
    let chat = post(handlers::chat).fallback(handlers::index);

    Router::new()
        .route("/", chat.clone())
        .route("/*path", chat)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let backend = create_backend(config.inference.as_ref())?;
    if backend.is_none() {
        warn!("No inference section configured; chat replies will be apologies");
    }

    let app = router(AppState::new(ChatGateway::new(backend)));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
