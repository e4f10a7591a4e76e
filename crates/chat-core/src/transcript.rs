//! Transcript Rendering
//!
//! The rendering seam: something that mounts messages, detaches pending
//! placeholders and keeps the view scrolled to the latest entry.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use crate::message::Message;

/// How long a freshly appended message keeps its entrance ("new") state
pub const ENTRANCE_TRANSITION: Duration = Duration::from_millis(300);

/// Opaque reference to a rendered message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageHandle(u64);

impl MessageHandle {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MessageHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

/// A message as mounted in the transcript
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedMessage {
    pub handle: MessageHandle,
    pub message: Message,

    /// Still inside its entrance transition
    pub fresh: bool,
}

impl RenderedMessage {
    pub const fn new(handle: MessageHandle, message: Message) -> Self {
        Self {
            handle,
            message,
            fresh: true,
        }
    }
}

/// Renders the transcript
///
/// Methods take `&self`: implementations use interior mutability, since the
/// transcript is only ever touched from one logical thread.
pub trait TranscriptRenderer {
    /// Mount `message` as the last entry, start its entrance transition and
    /// scroll to the bottom. Never fails.
    fn append(&self, message: Message) -> MessageHandle;

    /// Detach the entry behind `handle`. A handle that is no longer attached
    /// is ignored.
    fn remove(&self, handle: MessageHandle);

    /// Scroll the container to its maximum offset
    fn scroll_to_bottom(&self);
}

/// Mutation observed by [`MemoryTranscript`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranscriptEvent {
    Appended(MessageHandle),
    Removed(MessageHandle),
    Scrolled,
}

/// In-memory renderer (for development/testing)
#[derive(Debug, Default)]
pub struct MemoryTranscript {
    entries: RefCell<Vec<RenderedMessage>>,
    events: RefCell<Vec<TranscriptEvent>>,
    next_id: Cell<u64>,
}

impl MemoryTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the mounted entries, in order
    pub fn entries(&self) -> Vec<RenderedMessage> {
        self.entries.borrow().clone()
    }

    /// Snapshot of the mounted messages, in order
    pub fn messages(&self) -> Vec<Message> {
        self.entries
            .borrow()
            .iter()
            .map(|e| e.message.clone())
            .collect()
    }

    /// Every mutation so far, in order
    pub fn events(&self) -> Vec<TranscriptEvent> {
        self.events.borrow().clone()
    }

    /// Number of pending placeholders currently mounted
    pub fn pending_count(&self) -> usize {
        self.entries.borrow().iter().filter(|e| e.message.pending).count()
    }

    /// End the entrance transition of `handle`, as the timer would
    pub fn settle(&self, handle: MessageHandle) {
        if let Some(entry) = self
            .entries
            .borrow_mut()
            .iter_mut()
            .find(|e| e.handle == handle)
        {
            entry.fresh = false;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl TranscriptRenderer for MemoryTranscript {
    fn append(&self, message: Message) -> MessageHandle {
        let handle = MessageHandle::new(self.next_id.get());
        self.next_id.set(handle.id() + 1);

        self.entries
            .borrow_mut()
            .push(RenderedMessage::new(handle, message));
        self.events.borrow_mut().push(TranscriptEvent::Appended(handle));
        self.scroll_to_bottom();
        handle
    }

    fn remove(&self, handle: MessageHandle) {
        let mut entries = self.entries.borrow_mut();
        if let Some(pos) = entries.iter().position(|e| e.handle == handle) {
            entries.remove(pos);
            self.events.borrow_mut().push(TranscriptEvent::Removed(handle));
        }
    }

    fn scroll_to_bottom(&self) {
        self.events.borrow_mut().push(TranscriptEvent::Scrolled);
    }
}

impl<R: TranscriptRenderer + ?Sized> TranscriptRenderer for std::rc::Rc<R> {
    fn append(&self, message: Message) -> MessageHandle {
        (**self).append(message)
    }

    fn remove(&self, handle: MessageHandle) {
        (**self).remove(handle);
    }

    fn scroll_to_bottom(&self) {
        (**self).scroll_to_bottom();
    }
}
