//! Explicit application context shared by the router, pages and HTTP layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built once at mount by `init`, provided to the component tree, and torn
//! down when the root owner is disposed. Nothing here is global: tests build
//! their own contexts over in-memory fakes.
//!
//! WIRING
//! ======
//! - The `ApiClient` shares the `SessionStore` so it can attach the credential
//!   and clear the session on 401.
//! - Losing the identity resets the unread badge.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::client::ApiClient;
use crate::net::transport::Transport;
use crate::router::navigator::Navigator;
use crate::state::notices::{NoticeState, Notifier};
use crate::state::notifications::NotificationStore;
use crate::state::session::{Session, SessionStore};
use crate::util::storage::KeyValueStore;

/// Collaborators injected into [`AppContext::init`].
pub struct AppServices {
    pub config: ClientConfig,
    pub transport: Rc<dyn Transport>,
    pub storage: Rc<dyn KeyValueStore>,
    pub navigator: Rc<dyn Navigator>,
    pub notifier: Rc<dyn Notifier>,
}

/// How components reach the context. The stores are `Rc`-based, so the value
/// lives in thread-local arena storage behind a `Copy` handle.
pub type SharedContext = StoredValue<AppContext, LocalStorage>;

/// Reactive mirrors of the stores, for rendering.
#[derive(Clone, Copy)]
pub struct UiSignals {
    pub session: RwSignal<Session>,
    pub unread: RwSignal<u64>,
    pub notices: RwSignal<NoticeState>,
}

#[derive(Clone)]
pub struct AppContext {
    pub api: ApiClient,
    pub session: SessionStore,
    pub notifications: NotificationStore,
}

impl AppContext {
    /// Rehydrate the session and wire the stores together.
    #[must_use]
    pub fn init(services: AppServices) -> Self {
        let AppServices { config, transport, storage, navigator, notifier } = services;
        let session = SessionStore::rehydrate(storage);
        let api = ApiClient::new(config, transport, session.clone(), navigator, notifier);
        let notifications = NotificationStore::new();

        let badge = notifications.clone();
        session.on_change(move |snapshot| {
            if !snapshot.is_authenticated() {
                badge.reset();
            }
        });

        leptos::logging::log!(
            "app context ready: api_base={} authenticated={}",
            api.config().api_base,
            session.is_authenticated()
        );
        Self { api, session, notifications }
    }

    /// Browser wiring: `fetch` transport and `localStorage`.
    #[cfg(feature = "csr")]
    #[must_use]
    pub fn browser(config: ClientConfig, navigator: Rc<dyn Navigator>, notifier: Rc<dyn Notifier>) -> Self {
        use crate::net::transport::BrowserTransport;
        use crate::util::storage::BrowserStorage;

        let transport = Rc::new(BrowserTransport::new(config.timeout_ms));
        Self::init(AppServices { config, transport, storage: Rc::new(BrowserStorage), navigator, notifier })
    }

    /// Mirror store changes into the UI signals.
    pub fn bind(&self, ui: UiSignals) {
        self.session.on_change(move |snapshot| ui.session.set(snapshot.clone()));
        self.notifications.on_change(move |count| ui.unread.set(count));
    }

    /// Detach every listener so no callback outlives the UI it updates.
    ///
    /// The persisted session is left alone; this is not a logout.
    pub fn teardown(&self) {
        self.session.clear_listeners();
        self.notifications.clear_listeners();
        leptos::logging::log!("app context torn down");
    }
}
