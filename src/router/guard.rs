//! Pre-navigation check deciding whether a path may render.
//!
//! RULES
//! =====
//! 1. `/login` and `/register` always pass, with no side effects.
//! 2. A path that needs auth (`requires_auth` or a role set) without a
//!    credential redirects to login with a "please log in" notice.
//! 3. A credential without a profile triggers a profile fetch; on failure the
//!    session is dropped and the user is sent to login ("session expired").
//! 4. A role set that excludes the current role redirects home with a
//!    "forbidden" notice.
//! 5. Anything else passes. Unknown paths carry no requirements.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes::{self, HOME_PATH, LOGIN_PATH, REGISTER_PATH};
use crate::net::client::ApiClient;
use crate::state::notices::Notice;

pub const MSG_LOGIN_REQUIRED: &str = "Please log in first";
pub const MSG_SESSION_EXPIRED: &str = "Session expired, please log in again";
pub const MSG_FORBIDDEN: &str = "You do not have permission to access this page";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectLogin,
    RedirectHomeDenied,
}

impl GuardOutcome {
    /// Where to go instead, if anywhere.
    #[must_use]
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectLogin => Some(LOGIN_PATH),
            Self::RedirectHomeDenied => Some(HOME_PATH),
        }
    }
}

/// Evaluate rules 1-5 for `path` against the client's session.
pub async fn evaluate(api: &ApiClient, path: &str) -> GuardOutcome {
    let path = routes::normalize_path(path);
    if path == LOGIN_PATH || path == REGISTER_PATH {
        return GuardOutcome::Allow;
    }
    let Some(entry) = routes::find_route(path) else {
        return GuardOutcome::Allow;
    };
    if !entry.meta.needs_auth() {
        return GuardOutcome::Allow;
    }

    let session = api.session();
    if !session.is_authenticated() {
        api.notifier().notify(Notice::warning(MSG_LOGIN_REQUIRED));
        return GuardOutcome::RedirectLogin;
    }
    if !session.has_profile()
        && let Err(err) = session.fetch_current_user(api).await
    {
        leptos::logging::log!("profile fetch for {path} failed: {err}");
        session.logout();
        // A 401 was already announced by the HTTP wrapper.
        if !err.is_unauthorized() {
            api.notifier().notify(Notice::warning(MSG_SESSION_EXPIRED));
        }
        return GuardOutcome::RedirectLogin;
    }

    let role = session.role();
    if !entry.meta.allows_role(&role) {
        leptos::logging::warn!("role '{role}' denied for {path}");
        api.notifier().notify(Notice::error(MSG_FORBIDDEN));
        return GuardOutcome::RedirectHomeDenied;
    }
    GuardOutcome::Allow
}
