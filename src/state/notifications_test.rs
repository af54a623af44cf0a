use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;
use serde_json::{Value, json};

use super::*;
use crate::config::ClientConfig;
use crate::net::credential::Credential;
use crate::net::error::TransportError;
use crate::net::transport::{PreparedRequest, RawResponse, Transport};
use crate::state::notices::NoticeBoard;
use crate::state::session::SessionStore;
use crate::testing::{Harness, RecordingNavigator, envelope_body, ok_body, profile, status_body};
use crate::util::storage::MemoryStore;

fn signed_in() -> Harness {
    let h = Harness::new();
    h.session.establish(profile(1, "alice", "ROLE_STUDENT"), Credential::basic("alice", "pw").unwrap());
    h
}

/// Logs the session out while the request is on the wire, then answers.
struct LogoutDuringRequest {
    session: SessionStore,
    data: Value,
}

#[async_trait::async_trait(?Send)]
impl Transport for LogoutDuringRequest {
    async fn execute(&self, _request: PreparedRequest) -> Result<RawResponse, TransportError> {
        self.session.logout();
        Ok(ok_body(self.data.clone()))
    }
}

fn client_that_logs_out_mid_request(data: Value) -> ApiClient {
    let session = SessionStore::rehydrate(Rc::new(MemoryStore::new()));
    session.establish(profile(1, "alice", "ROLE_STUDENT"), Credential::basic("alice", "pw").unwrap());
    ApiClient::new(
        ClientConfig::default(),
        Rc::new(LogoutDuringRequest { session: session.clone(), data }),
        session,
        Rc::new(RecordingNavigator::default()),
        Rc::new(NoticeBoard::new()),
    )
}

#[test]
fn fetch_sets_count_and_notifies_listeners() {
    let h = signed_in();
    let store = NotificationStore::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    store.on_change(move |count| sink.borrow_mut().push(count));
    h.transport.push_ok(json!(3));

    block_on(store.fetch_unread_count(&h.api));

    assert_eq!(store.unread_count(), 3);
    assert_eq!(*seen.borrow(), vec![3]);
}

#[test]
fn fetch_failure_keeps_previous_count() {
    let h = signed_in();
    let store = NotificationStore::new();
    h.transport.push_ok(json!(2));
    block_on(store.fetch_unread_count(&h.api));

    h.transport.push(Ok(status_body(500, "")));
    block_on(store.fetch_unread_count(&h.api));

    assert_eq!(store.unread_count(), 2);
}

#[test]
fn mark_all_resets_only_on_success() {
    let h = signed_in();
    let store = NotificationStore::new();
    h.transport.push_ok(json!(5));
    block_on(store.fetch_unread_count(&h.api));

    h.transport.push(Ok(envelope_body(500, "busy")));
    assert!(!block_on(store.mark_all_as_read(&h.api)));
    assert_eq!(store.unread_count(), 5);

    h.transport.push_ok(Value::Null);
    assert!(block_on(store.mark_all_as_read(&h.api)));
    assert_eq!(store.unread_count(), 0);
    assert_eq!(h.transport.last_request().url, "/api/notifications/mark-all-read");
}

#[test]
fn mark_one_decrements_without_underflow() {
    let h = signed_in();
    let store = NotificationStore::new();
    h.transport.push_ok(Value::Null);

    assert!(block_on(store.mark_as_read(&h.api, 9)));
    assert_eq!(store.unread_count(), 0);
    assert_eq!(h.transport.last_request().url, "/api/notifications/mark-read/9");
}

#[test]
fn unchanged_count_does_not_emit() {
    let store = NotificationStore::new();
    let calls = Rc::new(RefCell::new(0));
    let sink = calls.clone();
    store.on_change(move |_| *sink.borrow_mut() += 1);

    store.reset();

    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn late_count_after_logout_is_dropped() {
    let api = client_that_logs_out_mid_request(json!(7));
    let store = NotificationStore::new();

    block_on(store.fetch_unread_count(&api));

    assert!(!api.session().is_authenticated());
    assert_eq!(store.unread_count(), 0);
}

#[test]
fn count_already_shown_is_cleared_when_logout_races_a_refresh() {
    let h = signed_in();
    let store = NotificationStore::new();
    h.transport.push_ok(json!(4));
    block_on(store.fetch_unread_count(&h.api));
    assert_eq!(store.unread_count(), 4);

    let api = client_that_logs_out_mid_request(json!(9));
    block_on(store.fetch_unread_count(&api));

    assert_eq!(store.unread_count(), 0);
}
