//! Error Types

use thiserror::Error;

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, ServerError>;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// LLM provider error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// Convert to the reason sent back to the widget
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Provider(_) => "I'm sorry, I encountered a critical error. Please try again.",
            Self::Config(_) => "The answer service is misconfigured.",
        }
    }
}
