//! # Notice State
//!
//! Toasts raised while a command runs. The dispatcher drains them into the
//! command's response.

use std::sync::{Arc, Mutex};

use hostel_core::Notice;

#[derive(Debug, Clone, Default)]
pub struct NoticeState {
    pending: Arc<Mutex<Vec<Notice>>>,
}

impl NoticeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, notice: Notice) {
        self.pending.lock().expect("Notice mutex poisoned").push(notice);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Notice::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Notice::error(message));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(Notice::info(message));
    }

    /// Takes everything raised so far, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.pending.lock().expect("Notice mutex poisoned"))
    }
}
