use futures::executor::block_on;

use super::*;
use crate::net::client::MSG_UNAUTHORIZED;
use crate::net::credential::Credential;
use crate::net::types::roles;
use crate::state::notices::{Notice, NoticeLevel};
use crate::state::session::CREDENTIAL_KEY;
use crate::testing::{Harness, profile, profile_json, status_body};
use crate::util::storage::{KeyValueStore, MemoryStore};

fn logged_in_as(role: &str) -> Harness {
    let h = Harness::new();
    h.session.establish(profile(1, "alice", role), Credential::basic("alice", "pw").unwrap());
    h
}

fn credential_only() -> Harness {
    let storage = MemoryStore::new();
    storage.set(CREDENTIAL_KEY, Credential::basic("alice", "pw").unwrap().encoded());
    Harness::with_storage(storage)
}

#[test]
fn login_and_register_pass_without_side_effects() {
    for h in [Harness::new(), logged_in_as(roles::STUDENT)] {
        let before = h.session.snapshot();
        assert_eq!(block_on(evaluate(&h.api, "/login")), GuardOutcome::Allow);
        assert_eq!(block_on(evaluate(&h.api, "/register?next=1")), GuardOutcome::Allow);
        assert_eq!(h.session.snapshot(), before);
        assert!(h.transport.requests().is_empty());
        assert!(h.notices.notices().is_empty());
    }
}

#[test]
fn protected_route_without_credential_redirects_to_login() {
    let h = Harness::new();

    assert_eq!(block_on(evaluate(&h.api, "/home/my-fines")), GuardOutcome::RedirectLogin);
    assert!(h.transport.requests().is_empty());
    assert_eq!(h.notices.notices(), vec![Notice::warning(MSG_LOGIN_REQUIRED)]);
}

#[test]
fn missing_profile_is_fetched_before_allowing() {
    let h = credential_only();
    h.transport.push_ok(profile_json(1, "alice", roles::BRANCH_ADMIN));

    assert_eq!(block_on(evaluate(&h.api, "/home/book-management")), GuardOutcome::Allow);
    assert_eq!(h.transport.last_request().url, "/api/auth/current-user");
    assert_eq!(h.session.role(), roles::BRANCH_ADMIN);
}

#[test]
fn failing_profile_fetch_logs_out_and_redirects_to_login() {
    let h = credential_only();
    h.transport.push(Ok(status_body(500, "")));

    assert_eq!(block_on(evaluate(&h.api, "/home/my-notifications")), GuardOutcome::RedirectLogin);
    assert!(!h.session.is_authenticated());
    assert!(h.storage.is_empty());
    assert!(h.notices.notices().contains(&Notice::warning(MSG_SESSION_EXPIRED)));
}

#[test]
fn rejected_credential_during_fetch_redirects_to_login() {
    let h = credential_only();
    h.transport.push(Ok(status_body(401, "")));

    assert_eq!(block_on(evaluate(&h.api, "/home/book-query")), GuardOutcome::RedirectLogin);
    assert!(h.storage.is_empty());
    assert_eq!(h.navigator.paths(), vec![LOGIN_PATH.to_owned()]);
    assert_eq!(h.notices.notices(), vec![Notice::error(MSG_UNAUTHORIZED)]);
}

#[test]
fn student_is_denied_user_management() {
    let h = logged_in_as(roles::STUDENT);

    assert_eq!(block_on(evaluate(&h.api, "/home/user-management")), GuardOutcome::RedirectHomeDenied);
    let notices = h.notices.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].message, MSG_FORBIDDEN);
    assert!(h.session.is_authenticated());
}

#[test]
fn excluded_roles_are_never_allowed() {
    let all_roles = [roles::SYSTEM_ADMIN, roles::BRANCH_ADMIN, roles::TEACHER, roles::STUDENT, ""];
    for role in all_roles {
        let h = logged_in_as(role);
        for entry in routes::ROUTES.iter().filter(|e| !e.meta.require_role.is_empty()) {
            let outcome = block_on(evaluate(&h.api, entry.path));
            let expected = if entry.meta.allows_role(role) { GuardOutcome::Allow } else { GuardOutcome::RedirectHomeDenied };
            assert_eq!(outcome, expected, "{role} -> {}", entry.path);
        }
    }
}

#[test]
fn parameterised_and_unknown_paths() {
    let h = logged_in_as(roles::TEACHER);
    assert_eq!(block_on(evaluate(&h.api, "/home/book-detail/17")), GuardOutcome::Allow);

    let anonymous = Harness::new();
    assert_eq!(block_on(evaluate(&anonymous.api, "/somewhere-else")), GuardOutcome::Allow);
}

#[test]
fn redirect_paths_per_outcome() {
    assert_eq!(GuardOutcome::Allow.redirect_path(), None);
    assert_eq!(GuardOutcome::RedirectLogin.redirect_path(), Some("/login"));
    assert_eq!(GuardOutcome::RedirectHomeDenied.redirect_path(), Some("/home"));
}
