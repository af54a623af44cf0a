//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated layouts apply identical "identity gone -> login" behavior,
//! whether the session ended by logout, a 401, or a failed profile refresh.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::roles;
use crate::router::routes::LOGIN_PATH;
use crate::state::session::Session;

/// True once the session no longer carries a credential.
#[must_use]
pub fn should_redirect_to_login(session: &Session) -> bool {
    !session.is_authenticated()
}

/// Redirect to `/login` whenever the reactive session loses its identity.
pub fn install_logout_redirect<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_to_login(&session.get()) {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Human label for a backend role name.
#[must_use]
pub fn role_label(role: &str) -> &'static str {
    match role {
        roles::SYSTEM_ADMIN => "System administrator",
        roles::BRANCH_ADMIN => "Branch administrator",
        roles::TEACHER => "Teacher",
        roles::STUDENT => "Student",
        _ => "Member",
    }
}
