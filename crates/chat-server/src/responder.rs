//! Answer Generation
//!
//! The server side of the answer service: something that turns a query into
//! answer text. `OllamaResponder` asks a local Ollama model.

use async_trait::async_trait;
use ollama_rs::{
    Ollama,
    generation::chat::{ChatMessage, request::ChatMessageRequest},
};

use crate::config::ServerConfig;
use crate::error::{Result, ServerError};

/// Produces answers for the `/get` endpoint
#[async_trait]
pub trait Responder: Send + Sync {
    /// Check if the backing model is reachable
    async fn health_check(&self) -> bool;

    /// Answer a single non-empty query
    async fn respond(&self, query: &str) -> Result<String>;
}

/// Responder backed by a local Ollama model
pub struct OllamaResponder {
    client: Ollama,
    model: String,
    system_prompt: String,
}

impl OllamaResponder {
    /// Create from configuration
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            client: Ollama::new(config.ollama_host.clone(), config.ollama_port),
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
        }
    }

    fn build_messages(&self, query: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.system_prompt.clone()),
            ChatMessage::user(query.to_string()),
        ]
    }
}

#[async_trait]
impl Responder for OllamaResponder {
    async fn health_check(&self) -> bool {
        match self.client.list_local_models().await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Ollama health check failed: {}", e);
                false
            }
        }
    }

    async fn respond(&self, query: &str) -> Result<String> {
        let request = ChatMessageRequest::new(self.model.clone(), self.build_messages(query));

        let response = self
            .client
            .send_chat_messages(request)
            .await
            .map_err(|e| ServerError::Provider(e.to_string()))?;

        Ok(response.message.content)
    }
}
