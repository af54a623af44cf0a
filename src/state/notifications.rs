//! Unread-notification counter behind the home badge.
//!
//! Failures are logged and swallowed: the counter is cosmetic, and the HTTP
//! wrapper has already shown a notice for anything the user should see.
//! A response that lands after the session lost its identity is dropped and
//! the count stays at zero.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::net::api::notifications;
use crate::net::client::ApiClient;

type Listener = Rc<dyn Fn(u64)>;

#[derive(Clone, Default)]
pub struct NotificationStore {
    unread: Rc<Cell<u64>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl NotificationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn unread_count(&self) -> u64 {
        self.unread.get()
    }

    pub fn on_change(&self, listener: impl Fn(u64) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn clear_listeners(&self) {
        self.listeners.borrow_mut().clear();
    }

    /// Refresh from the backend. Leaves the count unchanged on failure.
    pub async fn fetch_unread_count(&self, api: &ApiClient) {
        let result = notifications::get_unread_count(api).await;
        if !self.still_signed_in(api) {
            return;
        }
        match result {
            Ok(count) => self.set(count),
            Err(err) => leptos::logging::warn!("unread count refresh failed: {err}"),
        }
    }

    /// Mark everything read; the count drops to zero only on success.
    pub async fn mark_all_as_read(&self, api: &ApiClient) -> bool {
        match notifications::mark_all_as_read(api).await {
            Ok(()) => {
                self.set(0);
                true
            }
            Err(err) => {
                leptos::logging::warn!("mark all read failed: {err}");
                false
            }
        }
    }

    /// Mark one notification read and decrement locally.
    pub async fn mark_as_read(&self, api: &ApiClient, notification_id: i64) -> bool {
        match notifications::mark_as_read(api, notification_id).await {
            Ok(()) => {
                if self.still_signed_in(api) {
                    self.set(self.unread.get().saturating_sub(1));
                }
                true
            }
            Err(err) => {
                leptos::logging::warn!("mark read {notification_id} failed: {err}");
                false
            }
        }
    }

    /// Forget the count, e.g. after logout.
    pub fn reset(&self) {
        self.set(0);
    }

    /// Reset and report `false` when the session was cleared mid-request.
    fn still_signed_in(&self, api: &ApiClient) -> bool {
        if api.session().is_authenticated() {
            return true;
        }
        self.reset();
        false
    }

    fn set(&self, count: u64) {
        if self.unread.replace(count) == count {
            return;
        }
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(count);
        }
    }
}
