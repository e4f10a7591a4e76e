//! Signal-backed Input Field

use chat_core::InputField;
use leptos::prelude::*;

/// Query box state shared between the view and the dispatcher
#[derive(Clone, Copy, Debug)]
pub struct SignalInput {
    /// Text currently in the box
    pub value: RwSignal<String>,

    /// A submission is awaiting its answer
    pub busy: RwSignal<bool>,
}

impl SignalInput {
    pub fn new() -> Self {
        Self {
            value: RwSignal::new(String::new()),
            busy: RwSignal::new(false),
        }
    }
}

impl Default for SignalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputField for SignalInput {
    fn value(&self) -> String {
        self.value.get_untracked()
    }

    fn clear(&self) {
        self.value.set(String::new());
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }
}
