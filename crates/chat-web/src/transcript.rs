//! DOM Transcript
//!
//! `TranscriptRenderer` backed by a reactive list of rendered messages. The
//! view mounts one bubble per entry inside the scroll container referenced by
//! `container`.

use chat_core::{ENTRANCE_TRANSITION, Message, MessageHandle, RenderedMessage, TranscriptRenderer};
use leptos::{html, prelude::*};

#[derive(Clone, Copy)]
pub struct DomTranscript {
    entries: RwSignal<Vec<RenderedMessage>>,
    container: NodeRef<html::Div>,
    next_id: StoredValue<u64>,
}

impl DomTranscript {
    pub fn new(container: NodeRef<html::Div>) -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            container,
            next_id: StoredValue::new(0),
        }
    }

    /// Mounted entries, tracked
    pub fn entries(&self) -> Vec<RenderedMessage> {
        self.entries.get()
    }

    /// Whether `handle` is still inside its entrance transition, tracked
    pub fn is_fresh(&self, handle: MessageHandle) -> bool {
        self.entries
            .with(|entries| entries.iter().any(|e| e.handle == handle && e.fresh))
    }
}

impl TranscriptRenderer for DomTranscript {
    fn append(&self, message: Message) -> MessageHandle {
        let handle = MessageHandle::new(self.next_id.get_value());
        self.next_id.update_value(|id| *id += 1);

        self.entries
            .update(|entries| entries.push(RenderedMessage::new(handle, message)));

        // the entry may be gone by then; try_update also tolerates a disposed signal
        let entries = self.entries;
        set_timeout(
            move || {
                entries.try_update(|entries| {
                    if let Some(entry) = entries.iter_mut().find(|e| e.handle == handle) {
                        entry.fresh = false;
                    }
                });
            },
            ENTRANCE_TRANSITION,
        );

        self.scroll_to_bottom();
        handle
    }

    fn remove(&self, handle: MessageHandle) {
        let attached = self
            .entries
            .with_untracked(|entries| entries.iter().any(|e| e.handle == handle));
        if attached {
            self.entries
                .update(|entries| entries.retain(|e| e.handle != handle));
        }
    }

    fn scroll_to_bottom(&self) {
        // wait a frame so the height includes the entry just rendered
        let container = self.container;
        request_animation_frame(move || {
            if let Some(el) = container.get_untracked() {
                el.set_scroll_top(el.scroll_height());
            }
        });
    }
}
