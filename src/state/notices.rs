//! Transient user-visible notices ("please log in", "forbidden", backend errors).
//!
//! DESIGN
//! ======
//! Producers (HTTP wrapper, guard, stores) only see the `Notifier` trait. The
//! app shell renders notices from a reactive `NoticeState`; tests use the
//! plain `NoticeBoard` recorder.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// Sink for notices.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Rendered notice list with stable ids so the UI can dismiss entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub entries: Vec<(u64, Notice)>,
    next_id: u64,
}

/// Upper bound on simultaneously shown notices; oldest are dropped first.
pub const MAX_VISIBLE_NOTICES: usize = 4;

impl NoticeState {
    /// Push a notice and return its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, notice));
        if self.entries.len() > MAX_VISIBLE_NOTICES {
            let overflow = self.entries.len() - MAX_VISIBLE_NOTICES;
            self.entries.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }
}

/// In-memory recorder.
#[derive(Clone, Debug, Default)]
pub struct NoticeBoard {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl NoticeBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    /// Take and clear all recorded notices.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.borrow_mut())
    }
}

impl Notifier for NoticeBoard {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

/// Reactive sink rendered by the notice bar.
impl Notifier for RwSignal<NoticeState> {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => leptos::logging::warn!("notice: {}", notice.message),
            NoticeLevel::Info | NoticeLevel::Warning => leptos::logging::log!("notice: {}", notice.message),
        }
        self.update(|state| {
            state.push(notice);
        });
    }
}
