//! HTTP Handlers

use axum::{Json, extract::State, http::StatusCode};
use chat_core::service::{AnswerBody, QueryRequest};
use serde::Serialize;

use crate::state::AppState;

/// Reply to a blank query
pub const EMPTY_QUERY_REPLY: &str = "Please enter a message.";

/// Reply when the model produced nothing
pub const NO_ANSWER_REPLY: &str = "I couldn't find a relevant answer to that question.";

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub ollama_connected: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        ollama_connected: state.responder.health_check().await,
    })
}

/// Answer endpoint consumed by the widget
pub async fn answer_handler(
    State(state): State<AppState>,
    Json(payload): Json<QueryRequest>,
) -> Result<Json<AnswerBody>, (StatusCode, Json<AnswerBody>)> {
    let query = payload.query.trim();
    tracing::debug!(query, "Received query");

    if query.is_empty() {
        return Ok(Json(AnswerBody::new(EMPTY_QUERY_REPLY)));
    }

    let answer = state.responder.respond(query).await.map_err(|e| {
        tracing::error!("Responder error: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(AnswerBody::new(e.user_message())),
        )
    })?;

    if answer.trim().is_empty() {
        tracing::debug!("Responder produced an empty answer");
        return Ok(Json(AnswerBody::new(NO_ANSWER_REPLY)));
    }

    Ok(Json(AnswerBody::new(answer)))
}
