//! # chat-core
//!
//! Message lifecycle controller for the chat widget.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     QueryDispatcher                          │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌────────────────┐  │
//! │  │  InputField  │──│ TranscriptRender │──│ AnswerService  │  │
//! │  │  (query box) │  │ (messages/scroll)│  │ (remote call)  │  │
//! │  └──────────────┘  └──────────────────┘  └────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! All three collaborators are handed to the dispatcher at construction, so
//! the lifecycle runs unchanged against the DOM, an HTTP client, or the
//! in-memory fakes in this crate.

pub mod dispatcher;
pub mod error;
pub mod input;
pub mod message;
pub mod service;
pub mod transcript;

pub use dispatcher::{QueryDispatcher, Submission, SubmissionState};
pub use error::{FALLBACK_MESSAGE, Failure, Outcome};
pub use input::{InputField, MemoryInput};
pub use message::{AVATAR_PATH, Message, PENDING_TEXT, Role};
pub use service::{ANSWER_PATH, AnswerBody, AnswerService, ErrorBody, QueryRequest, service_fn};
pub use transcript::{
    ENTRANCE_TRANSITION, MemoryTranscript, MessageHandle, RenderedMessage, TranscriptRenderer,
};
