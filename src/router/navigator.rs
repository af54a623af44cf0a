//! Imperative navigation seam.
//!
//! The HTTP wrapper has to force `/login` after a 401 from outside any
//! component, so it goes through this trait instead of `use_navigate`. The app
//! shell implements it with a pending-redirect signal that a component inside
//! the router drains.

use leptos::prelude::*;

pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Redirect requested from non-component code, consumed by the router shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingRedirect {
    pub path: Option<String>,
    /// Bumped on every request so repeated redirects to the same path still fire.
    pub seq: u64,
}

impl Navigator for RwSignal<PendingRedirect> {
    fn navigate(&self, path: &str) {
        self.update(|pending| {
            pending.path = Some(path.to_owned());
            pending.seq += 1;
        });
    }
}
