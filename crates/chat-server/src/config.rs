//! Server Configuration

use crate::error::{Result, ServerError};

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a knowledgeable and precise medical assistant.
Answer health-related questions accurately and directly.

When asked for a normal, regular or healthy range of a measurement (blood pressure, heart rate, temperature), state the standard healthy values first. Only describe abnormal values when asked or when no normal range is known.

If you do not know the answer, say so plainly. Do not speculate.
Start the answer immediately with its first word; no prefixes such as 'Answer:' or 'AI:'.";

/// Runtime settings, read from the environment
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,

    /// Directory holding the page shell, widget bundle and images
    pub static_dir: String,

    /// Ollama host URL
    pub ollama_host: String,

    /// Ollama port
    pub ollama_port: u16,

    /// Model answering the queries
    pub model: String,

    /// System prompt sent ahead of every query
    pub system_prompt: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".into(),
            static_dir: "static".into(),
            ollama_host: "http://localhost".into(),
            ollama_port: 11434,
            model: "llama3.2".into(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let ollama_port = match std::env::var("OLLAMA_PORT") {
            Ok(port) => port
                .parse()
                .map_err(|_| ServerError::Config(format!("OLLAMA_PORT is not a port: {port}")))?,
            Err(_) => defaults.ollama_port,
        };

        Ok(Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: std::env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
            ollama_host: std::env::var("OLLAMA_HOST").unwrap_or(defaults.ollama_host),
            ollama_port,
            model: std::env::var("OLLAMA_MODEL").unwrap_or(defaults.model),
            system_prompt: std::env::var("SYSTEM_PROMPT").unwrap_or(defaults.system_prompt),
        })
    }
}
