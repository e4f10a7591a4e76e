//! chat-widget HTTP Server
//!
//! Axum-based host for the chat widget: serves the page shell and the WASM
//! bundle from the static directory, and answers `POST /get` with a locally
//! running Ollama model.

mod config;
mod error;
mod handlers;
mod responder;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::{answer_handler, health_check};
use crate::responder::{OllamaResponder, Responder};
use crate::state::AppState;

/// API routes, with everything else served from `static_dir`
fn build_router(state: AppState, static_dir: &str) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route(chat_core::ANSWER_PATH, post(answer_handler))
        // Page shell, WASM bundle and images, by path relative to `static_dir`
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()?;

    // Initialize responder
    let responder = Arc::new(OllamaResponder::from_config(&config));

    if responder.health_check().await {
        tracing::info!("✓ Connected to Ollama (model: {})", config.model);
    } else {
        tracing::warn!("⚠ Ollama not available - answers will fail");
        tracing::warn!("  Make sure Ollama is running: ollama serve");
    }

    let state = AppState { responder };
    let app = build_router(state, &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 chat-widget server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health - Health check");
    tracing::info!("  POST {}    - Answer a query", chat_core::ANSWER_PATH);
    tracing::info!("  GET  /*      - Static files from {}", config.static_dir);
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
