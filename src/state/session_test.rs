use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::types::roles;
use crate::testing::{Harness, envelope_body, profile, profile_json, status_body};
use crate::util::storage::{KeyValueStore, MemoryStore};

fn store_with(entries: &[(&str, &str)]) -> MemoryStore {
    let storage = MemoryStore::new();
    for (key, value) in entries {
        storage.set(key, value);
    }
    storage
}

fn login_request(username: &str, password: &str) -> LoginRequest {
    LoginRequest { username: username.into(), password: password.into() }
}

// =============================================================
// rehydrate
// =============================================================

#[test]
fn empty_storage_starts_logged_out() {
    let store = SessionStore::rehydrate(Rc::new(MemoryStore::new()));
    assert_eq!(store.snapshot(), Session::default());
}

#[test]
fn full_session_round_trips_through_storage() {
    let h = Harness::new();
    h.session.establish(profile(1, "alice", roles::TEACHER), Credential::basic("alice", "pw").unwrap());

    let restored = SessionStore::rehydrate(Rc::new(h.storage.clone()));

    assert_eq!(restored.snapshot(), h.session.snapshot());
    assert_eq!(restored.role(), roles::TEACHER);
}

#[test]
fn stored_role_is_rederived_from_profile() {
    let profile_text = profile_json(1, "alice", roles::STUDENT).to_string();
    let credential = Credential::basic("alice", "pw").unwrap();
    let storage = store_with(&[
        (CREDENTIAL_KEY, credential.encoded()),
        (PROFILE_KEY, &profile_text),
        (ROLE_KEY, roles::SYSTEM_ADMIN),
    ]);

    let store = SessionStore::rehydrate(Rc::new(storage.clone()));

    assert_eq!(store.role(), roles::STUDENT);
    assert_eq!(storage.get(ROLE_KEY).as_deref(), Some(roles::STUDENT));
}

#[test]
fn credential_without_profile_is_kept() {
    let credential = Credential::basic("alice", "pw").unwrap();
    let storage = store_with(&[(CREDENTIAL_KEY, credential.encoded()), (ROLE_KEY, roles::SYSTEM_ADMIN)]);

    let store = SessionStore::rehydrate(Rc::new(storage.clone()));

    assert!(store.is_authenticated());
    assert!(!store.has_profile());
    assert_eq!(store.role(), "");
    assert_eq!(storage.get(ROLE_KEY), None);
}

#[test]
fn corrupt_values_wipe_the_whole_session() {
    let valid_profile = profile_json(1, "alice", roles::STUDENT).to_string();
    let valid_credential = Credential::basic("alice", "pw").unwrap();
    let cases: Vec<Vec<(&str, &str)>> = vec![
        vec![(CREDENTIAL_KEY, valid_credential.encoded()), (PROFILE_KEY, "{not json")],
        vec![(CREDENTIAL_KEY, "%%%not-base64"), (PROFILE_KEY, &valid_profile)],
        vec![(CREDENTIAL_KEY, "bm9jb2xvbg==")],
        vec![(PROFILE_KEY, &valid_profile), (ROLE_KEY, roles::STUDENT)],
    ];
    for entries in cases {
        let storage = store_with(&entries);

        let store = SessionStore::rehydrate(Rc::new(storage.clone()));

        assert_eq!(store.snapshot(), Session::default(), "{entries:?}");
        assert!(storage.is_empty(), "{entries:?}");
    }
}

// =============================================================
// login / fetch
// =============================================================

#[test]
fn login_persists_profile_role_and_credential() {
    let h = Harness::new();
    h.transport.push_ok(profile_json(7, "bob", roles::BRANCH_ADMIN));

    let user = block_on(h.session.login(&h.api, login_request(" bob ", "pw"))).unwrap();

    assert_eq!(user.username, "bob");
    assert_eq!(h.session.role(), roles::BRANCH_ADMIN);
    assert_eq!(h.session.credential(), Some(Credential::basic("bob", "pw").unwrap()));
    assert_eq!(h.storage.get(CREDENTIAL_KEY).as_deref(), Some(Credential::basic("bob", "pw").unwrap().encoded()));
    assert_eq!(h.storage.get(ROLE_KEY).as_deref(), Some(roles::BRANCH_ADMIN));
    let stored: serde_json::Value = serde_json::from_str(&h.storage.get(PROFILE_KEY).unwrap()).unwrap();
    assert_eq!(stored["username"], "bob");
    assert_eq!(h.transport.last_request().header("Authorization"), None);
}

#[test]
fn blank_login_fields_fail_without_a_request() {
    let h = Harness::new();

    let err = block_on(h.session.login(&h.api, login_request("  ", "pw"))).unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert!(h.transport.requests().is_empty());
}

#[test]
fn username_with_colon_is_refused_before_sending() {
    let h = Harness::new();

    let err = block_on(h.session.login(&h.api, login_request("a:b", "pw"))).unwrap_err();

    assert_eq!(err, ApiError::Validation(crate::net::credential::MSG_USERNAME_COLON.to_owned()));
    assert!(h.transport.requests().is_empty());
    assert!(!h.session.is_authenticated());
    assert_eq!(h.storage.get(CREDENTIAL_KEY), None);
}

#[test]
fn failed_login_leaves_no_partial_state() {
    let h = Harness::new();
    h.session.establish(profile(1, "alice", roles::STUDENT), Credential::basic("alice", "pw").unwrap());
    h.transport.push(Ok(envelope_body(400, "Wrong password")));

    let err = block_on(h.session.login(&h.api, login_request("bob", "bad"))).unwrap_err();

    assert!(matches!(err, ApiError::Business { .. }));
    assert_eq!(h.session.snapshot(), Session::default());
    assert!(h.storage.is_empty());
}

#[test]
fn login_then_fetch_keeps_role_equal_to_profile_role() {
    let h = Harness::new();
    h.transport.push_ok(profile_json(7, "bob", roles::STUDENT));
    h.transport.push_ok(profile_json(7, "bob", roles::TEACHER));

    block_on(h.session.login(&h.api, login_request("bob", "pw"))).unwrap();
    let fetched = block_on(h.session.fetch_current_user(&h.api)).unwrap();

    assert_eq!(h.session.role(), fetched.role_name());
    assert_eq!(h.session.role(), roles::TEACHER);
    assert_eq!(h.transport.last_request().header("Authorization"), Some(Credential::basic("bob", "pw").unwrap().header_value().as_str()));
}

#[test]
fn fetch_without_credential_sends_nothing() {
    let h = Harness::new();

    let err = block_on(h.session.fetch_current_user(&h.api)).unwrap_err();

    assert!(err.is_unauthorized());
    assert!(h.transport.requests().is_empty());
}

#[test]
fn fetch_rejected_with_401_clears_session() {
    let h = Harness::new();
    h.session.establish(profile(1, "alice", roles::STUDENT), Credential::basic("alice", "pw").unwrap());
    h.transport.push(Ok(status_body(401, "")));

    assert!(block_on(h.session.fetch_current_user(&h.api)).is_err());
    assert_eq!(h.session.snapshot(), Session::default());
    assert!(h.storage.is_empty());
}

#[test]
fn fetch_network_failure_keeps_session() {
    let h = Harness::new();
    h.session.establish(profile(1, "alice", roles::STUDENT), Credential::basic("alice", "pw").unwrap());
    h.transport.push(Ok(status_body(500, "")));

    assert!(block_on(h.session.fetch_current_user(&h.api)).is_err());
    assert!(h.session.is_authenticated());
    assert_eq!(h.session.role(), roles::STUDENT);
}

// =============================================================
// logout / listeners
// =============================================================

#[test]
fn logout_twice_equals_logout_once() {
    let h = Harness::new();
    h.session.establish(profile(1, "alice", roles::STUDENT), Credential::basic("alice", "pw").unwrap());

    h.session.logout();
    let once = (h.session.snapshot(), h.storage.len());
    h.session.logout();

    assert_eq!((h.session.snapshot(), h.storage.len()), once);
    assert_eq!(once, (Session::default(), 0));
}

#[test]
fn listeners_fire_on_identity_changes_only() {
    let h = Harness::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    h.session.on_change(move |session| sink.borrow_mut().push(session.is_authenticated()));

    h.session.establish(profile(1, "alice", roles::STUDENT), Credential::basic("alice", "pw").unwrap());
    h.session.logout();
    h.session.logout();

    assert_eq!(*seen.borrow(), vec![true, false]);
}

#[test]
fn update_profile_is_ignored_when_logged_out() {
    let h = Harness::new();

    h.session.update_profile(profile(1, "alice", roles::STUDENT));

    assert!(!h.session.has_profile());
    assert!(h.storage.is_empty());
}

#[test]
fn replace_credential_keeps_profile() {
    let h = Harness::new();
    h.session.establish(profile(1, "alice", roles::STUDENT), Credential::basic("alice", "old").unwrap());

    h.session.replace_credential(Credential::basic("alice", "new").unwrap());

    assert_eq!(h.session.credential(), Some(Credential::basic("alice", "new").unwrap()));
    assert_eq!(h.session.role(), roles::STUDENT);
}
