//! Chat Messages
//!
//! The message model rendered into the transcript.

/// Text shown in the assistant placeholder while an answer is pending
pub const PENDING_TEXT: &str = "Thinking…";

/// Avatar image shown next to assistant messages, served by the page shell
pub const AVATAR_PATH: &str = "/images/avatar.png";

/// Role of a message sender
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// User input
    User,
    /// Assistant answer (or error report)
    Assistant,
}

impl Role {
    /// Assistant messages carry an avatar; user messages don't.
    pub const fn has_avatar(self) -> bool {
        matches!(self, Self::Assistant)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single message in the transcript
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Message role
    pub role: Role,

    /// Text content, inserted as plain text
    pub text: String,

    /// Placeholder for an in-flight request
    pub pending: bool,
}

impl Message {
    /// Create a new message
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            pending: false,
        }
    }

    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    /// Create an assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    /// Create the assistant placeholder shown while a request is in flight
    pub fn pending() -> Self {
        Self {
            role: Role::Assistant,
            text: PENDING_TEXT.into(),
            pending: true,
        }
    }
}
