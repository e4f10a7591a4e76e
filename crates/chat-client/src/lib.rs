//! # chat-client
//!
//! Answer service clients for the chat widget.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chat_client::HttpAnswerService;
//! use chat_core::{MemoryInput, MemoryTranscript, QueryDispatcher};
//!
//! let service = HttpAnswerService::new("http://localhost:8080");
//! let dispatcher = QueryDispatcher::new(MemoryTranscript::new(), MemoryInput::new(), service);
//! dispatcher.submit_query("What is a normal resting heart rate?").await;
//! ```

pub mod http;

pub use http::{ClientConfig, HttpAnswerService};

// Re-export core types for convenience
pub use chat_core::{AnswerService, Failure, Outcome};
