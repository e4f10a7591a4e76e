//! Input Field
//!
//! The text box the dispatcher reads queries from.

use std::cell::{Cell, RefCell};

/// Handle to the query input of the page
pub trait InputField {
    /// Current raw contents
    fn value(&self) -> String;

    /// Empty the field
    fn clear(&self);

    /// Toggle the busy state while a submission awaits its answer, so the
    /// binding can disable the send control
    fn set_busy(&self, busy: bool);
}

/// In-memory input field (for development/testing)
#[derive(Debug, Default)]
pub struct MemoryInput {
    value: RefCell<String>,
    busy: Cell<bool>,
}

impl MemoryInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user typing `text`
    pub fn type_text(&self, text: impl Into<String>) {
        *self.value.borrow_mut() = text.into();
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

impl InputField for MemoryInput {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn clear(&self) {
        self.value.borrow_mut().clear();
    }

    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }
}

impl<I: InputField + ?Sized> InputField for std::rc::Rc<I> {
    fn value(&self) -> String {
        (**self).value()
    }

    fn clear(&self) {
        (**self).clear();
    }

    fn set_busy(&self, busy: bool) {
        (**self).set_busy(busy);
    }
}
