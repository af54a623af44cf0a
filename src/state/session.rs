//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard, the HTTP wrapper (credential header, 401 cleanup)
//! and user-aware pages. One `SessionStore` exists per `AppContext`; clones
//! share the same state.
//!
//! INVARIANTS
//! ==========
//! - `role` always equals `profile.role.name` (empty without a profile).
//! - No credential means no identity: a profile is never kept without one.
//! - Every mutation is written through to storage under fixed keys, and
//!   clearing removes all of them, so a restart rehydrates exactly what
//!   memory held.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::api::auth;
use crate::net::client::ApiClient;
use crate::net::credential::Credential;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, UserProfile};
use crate::util::storage::{KeyValueStore, save_json};

pub const CREDENTIAL_KEY: &str = "basic_auth";
pub const PROFILE_KEY: &str = "userInfo";
pub const ROLE_KEY: &str = "userRole";

/// Snapshot of the authenticated identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub profile: Option<UserProfile>,
    pub role: String,
    pub credential: Option<Credential>,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    fn set_profile(&mut self, profile: UserProfile) {
        self.role = profile.role_name().to_owned();
        self.profile = Some(profile);
    }
}

type Listener = Rc<dyn Fn(&Session)>;

/// Shared, persisted session container.
#[derive(Clone)]
pub struct SessionStore {
    session: Rc<RefCell<Session>>,
    storage: Rc<dyn KeyValueStore>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl SessionStore {
    /// Rebuild the session from storage.
    ///
    /// Missing values mean logged out. Corrupt values (unparseable profile,
    /// malformed credential) or a profile without a credential wipe every key
    /// and start logged out.
    pub fn rehydrate(storage: Rc<dyn KeyValueStore>) -> Self {
        let session = read_persisted(storage.as_ref()).unwrap_or_else(|| {
            leptos::logging::warn!("discarding corrupt persisted session");
            remove_persisted(storage.as_ref());
            Session::default()
        });
        let store = Self {
            session: Rc::new(RefCell::new(session)),
            storage,
            listeners: Rc::new(RefCell::new(Vec::new())),
        };
        // Role is derived, never trusted from storage.
        store.persist();
        store
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        self.session.borrow().credential.clone()
    }

    #[must_use]
    pub fn profile(&self) -> Option<UserProfile> {
        self.session.borrow().profile.clone()
    }

    #[must_use]
    pub fn role(&self) -> String {
        self.session.borrow().role.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_authenticated()
    }

    #[must_use]
    pub fn has_profile(&self) -> bool {
        self.session.borrow().profile.is_some()
    }

    /// Register a callback invoked after every mutation.
    pub fn on_change(&self, listener: impl Fn(&Session) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Drop every registered listener.
    pub fn clear_listeners(&self) {
        self.listeners.borrow_mut().clear();
    }

    /// Install a freshly authenticated identity.
    pub fn establish(&self, profile: UserProfile, credential: Credential) {
        {
            let mut session = self.session.borrow_mut();
            session.credential = Some(credential);
            session.set_profile(profile);
        }
        self.persist();
        self.emit();
    }

    /// Replace the profile (and derived role) of the current identity.
    ///
    /// Ignored when there is no credential, keeping the no-identity invariant.
    pub fn update_profile(&self, profile: UserProfile) {
        {
            let mut session = self.session.borrow_mut();
            if session.credential.is_none() {
                return;
            }
            session.set_profile(profile);
        }
        self.persist();
        self.emit();
    }

    /// Swap the credential of the current identity (after a password change).
    ///
    /// Ignored when logged out.
    pub fn replace_credential(&self, credential: Credential) {
        {
            let mut session = self.session.borrow_mut();
            if session.credential.is_none() {
                return;
            }
            session.credential = Some(credential);
        }
        self.persist();
        self.emit();
    }

    /// Drop the identity from memory and storage.
    ///
    /// Idempotent. Returns whether an identity was present.
    pub fn clear(&self) -> bool {
        let had_identity = {
            let mut session = self.session.borrow_mut();
            let had = session.credential.is_some() || session.profile.is_some();
            *session = Session::default();
            had
        };
        remove_persisted(self.storage.as_ref());
        if had_identity {
            self.emit();
        }
        had_identity
    }

    /// Log out locally. Safe to call repeatedly.
    pub fn logout(&self) {
        if self.clear() {
            leptos::logging::log!("session cleared");
        }
    }

    /// Authenticate with username and password.
    ///
    /// On success the profile, role and credential are stored and persisted.
    /// On any failure the session ends fully logged out.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for blank fields or a username that
    /// cannot be carried by Basic auth (no request is sent), otherwise the
    /// error of the login call.
    pub async fn login(&self, api: &ApiClient, request: LoginRequest) -> Result<UserProfile, ApiError> {
        let username = request.username.trim().to_owned();
        if username.is_empty() || request.password.is_empty() {
            return Err(ApiError::Validation("Enter both username and password.".to_owned()));
        }
        let credential = Credential::basic(&username, &request.password)?;
        let request = LoginRequest { username, password: request.password };
        match auth::login(api, &request).await {
            Ok(profile) => {
                self.establish(profile.clone(), credential);
                Ok(profile)
            }
            Err(err) => {
                self.clear();
                Err(err)
            }
        }
    }

    /// Refresh the profile using the stored credential.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when there is no credential or the
    /// backend rejects it (the session is cleared in both cases); other
    /// failures leave the session untouched.
    pub async fn fetch_current_user(&self, api: &ApiClient) -> Result<UserProfile, ApiError> {
        if !self.is_authenticated() {
            self.clear();
            return Err(ApiError::Unauthorized("not logged in".to_owned()));
        }
        match auth::current_user(api).await {
            Ok(profile) => {
                self.update_profile(profile.clone());
                Ok(profile)
            }
            Err(err) => {
                if err.is_unauthorized() {
                    self.clear();
                }
                Err(err)
            }
        }
    }

    fn persist(&self) {
        let session = self.session.borrow();
        let storage = self.storage.as_ref();
        match &session.credential {
            Some(credential) => storage.set(CREDENTIAL_KEY, credential.encoded()),
            None => storage.remove(CREDENTIAL_KEY),
        }
        match &session.profile {
            Some(profile) => {
                save_json(storage, PROFILE_KEY, profile);
                storage.set(ROLE_KEY, &session.role);
            }
            None => {
                storage.remove(PROFILE_KEY);
                storage.remove(ROLE_KEY);
            }
        }
    }

    fn emit(&self) {
        let snapshot = self.snapshot();
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

/// Read the persisted session; `None` when any present value is corrupt or
/// the values are inconsistent.
fn read_persisted(storage: &dyn KeyValueStore) -> Option<Session> {
    let credential = match storage.get(CREDENTIAL_KEY) {
        Some(raw) => Some(Credential::from_encoded(&raw)?),
        None => None,
    };
    let profile = match storage.get(PROFILE_KEY) {
        Some(raw) => Some(serde_json::from_str::<UserProfile>(&raw).ok()?),
        None => None,
    };
    match (credential, profile) {
        (None, None) => Some(Session::default()),
        (None, Some(_)) => None,
        (Some(credential), profile) => {
            let mut session = Session { credential: Some(credential), ..Session::default() };
            if let Some(profile) = profile {
                session.set_profile(profile);
            }
            Some(session)
        }
    }
}

fn remove_persisted(storage: &dyn KeyValueStore) {
    storage.remove(CREDENTIAL_KEY);
    storage.remove(PROFILE_KEY);
    storage.remove(ROLE_KEY);
}
