//! Error Types

use thiserror::Error;

/// Reason shown to the user when a failure carries no message of its own
pub const FALLBACK_MESSAGE: &str = "Could not get an answer. Please try again.";

/// Result of a single remote call: the answer text, or why there is none
pub type Outcome = std::result::Result<String, Failure>;

/// Ways a dispatched query can fail
///
/// Every failure is terminal for its submission and ends up in the
/// transcript as an assistant message built by [`Failure::user_message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The request never reached the server or no response came back
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("Server returned status {status}: {}", .reason.as_deref().unwrap_or("no reason given"))]
    Status { status: u16, reason: Option<String> },

    /// Success status, but the body was not the expected JSON
    #[error("Malformed answer body: {0}")]
    MalformedBody(String),
}

impl Failure {
    /// Build a status failure, dropping a blank server reason
    pub fn status(status: u16, reason: Option<String>) -> Self {
        Self::Status {
            status,
            reason: reason.filter(|r| !r.trim().is_empty()),
        }
    }

    /// Human-readable reason, if the failure carries one
    pub fn reason(&self) -> Option<&str> {
        let reason = match self {
            Self::Transport(description) => Some(description.as_str()),
            Self::Status { reason, .. } => reason.as_deref(),
            Self::MalformedBody(_) => None,
        };
        reason.filter(|r| !r.trim().is_empty())
    }

    /// HTTP status code, for protocol failures
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text of the assistant message reporting this failure
    ///
    /// A status failure without a server reason still reports its code.
    pub fn user_message(&self) -> String {
        match (self.reason(), self.status_code()) {
            (Some(reason), _) => format!("Error: {reason}"),
            (None, Some(status)) => format!("Error: {FALLBACK_MESSAGE} (status {status})"),
            (None, None) => format!("Error: {FALLBACK_MESSAGE}"),
        }
    }
}
