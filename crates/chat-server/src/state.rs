//! Application State

use std::sync::Arc;

use crate::responder::Responder;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Answer generator (Ollama, or a fake in tests)
    pub responder: Arc<dyn Responder>,
}
