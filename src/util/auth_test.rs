use super::*;
use crate::net::credential::Credential;
use crate::testing::profile;

#[test]
fn redirects_when_no_credential() {
    assert!(should_redirect_to_login(&Session::default()));
}

#[test]
fn credential_without_profile_does_not_redirect() {
    let session = Session { credential: Some(Credential::basic("a", "b").unwrap()), ..Session::default() };
    assert!(!should_redirect_to_login(&session));
}

#[test]
fn full_session_does_not_redirect() {
    let session = Session {
        profile: Some(profile(1, "alice", roles::STUDENT)),
        role: roles::STUDENT.to_owned(),
        credential: Some(Credential::basic("alice", "pw").unwrap()),
    };
    assert!(!should_redirect_to_login(&session));
}

#[test]
fn role_labels_cover_known_roles() {
    assert_eq!(role_label(roles::SYSTEM_ADMIN), "System administrator");
    assert_eq!(role_label(roles::STUDENT), "Student");
    assert_eq!(role_label(""), "Member");
}
