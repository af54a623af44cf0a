//! HTTP wrapper shared by every backend call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` owns the base URL/timeout config and the transport, reads the
//! credential from the `SessionStore`, and is the single place that turns raw
//! responses into `ApiError`s.
//!
//! ERROR HANDLING
//! ==============
//! - Transport failure or timeout: "network error" notice, `Network`/`Timeout`.
//! - HTTP 401 or envelope code 401: session cleared, forced navigation to
//!   `/login`, `Unauthorized`. Clearing is idempotent, so concurrent 401s
//!   converge on the same logged-out state.
//! - Other HTTP error statuses and non-200 envelopes: notice with the backend
//!   message, `Http`/`Business`.
//! Every failure is also returned to the caller for local handling.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::rc::Rc;

use serde::de::DeserializeOwned;

use super::envelope::{ApiOutcome, Envelope, UNAUTHORIZED_CODE};
use super::error::ApiError;
use super::transport::{ApiRequest, PreparedRequest, RawResponse, Transport};
use crate::config::ClientConfig;
use crate::router::navigator::Navigator;
use crate::router::routes::LOGIN_PATH;
use crate::state::notices::{Notice, Notifier};
use crate::state::session::SessionStore;

pub const MSG_NETWORK: &str = "Network error, please check your connection";
pub const MSG_TIMEOUT: &str = "Request timed out, please try again";
pub const MSG_UNAUTHORIZED: &str = "Authentication failed, please log in again";
pub const MSG_FORBIDDEN: &str = "Permission denied";
pub const MSG_NOT_FOUND: &str = "The requested resource does not exist";
pub const MSG_SERVER: &str = "Internal server error";
pub const MSG_GENERIC: &str = "Request failed";
pub const MSG_MALFORMED: &str = "Unexpected response from server";

struct Inner {
    config: ClientConfig,
    transport: Rc<dyn Transport>,
    session: SessionStore,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
}

/// Cheaply clonable handle; clones share transport and session.
#[derive(Clone)]
pub struct ApiClient {
    inner: Rc<Inner>,
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        transport: Rc<dyn Transport>,
        session: SessionStore,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self { inner: Rc::new(Inner { config, transport, session, navigator, notifier }) }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    #[must_use]
    pub fn notifier(&self) -> &dyn Notifier {
        self.inner.notifier.as_ref()
    }

    /// Resolve URL and headers for a request.
    #[must_use]
    pub fn prepare(&self, request: &ApiRequest) -> PreparedRequest {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        if !request.anonymous
            && let Some(credential) = self.inner.session.credential()
        {
            headers.push(("Authorization".to_owned(), credential.header_value()));
        }
        PreparedRequest {
            method: request.method,
            url: self.inner.config.url_for(&request.path),
            query: request.query.clone(),
            headers,
            body: request.body.as_ref().map(ToString::to_string),
        }
    }

    /// Send a request and return the unwrapped `data`.
    ///
    /// # Errors
    ///
    /// See the module docs; every failure class maps to an [`ApiError`].
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        self.send_with_message(request).await.map(|(data, _)| data)
    }

    /// Send a request and return `data` together with the envelope message.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::send`].
    pub async fn send_with_message<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<(T, String), ApiError> {
        let envelope = self.exchange(request).await?;
        match envelope.into_outcome::<T>() {
            Ok(ApiOutcome::Success { data, message }) => Ok((data, message)),
            Ok(failure @ ApiOutcome::Failure { .. }) => failure.into_result().map(|data| (data, String::new())),
            Err(err) => {
                leptos::logging::warn!("response data did not match expected shape: {err}");
                self.inner.notifier.notify(Notice::error(MSG_MALFORMED));
                Err(err)
            }
        }
    }

    /// Run the request and classify everything except a successful envelope.
    async fn exchange(&self, request: ApiRequest) -> Result<Envelope, ApiError> {
        let prepared = self.prepare(&request);
        let method = prepared.method.as_str();
        let url = prepared.url.clone();

        let response = match self.inner.transport.execute(prepared).await {
            Ok(response) => response,
            Err(err) => {
                leptos::logging::warn!("{method} {url} transport failure: {err}");
                let err = ApiError::from(err);
                let message = if matches!(err, ApiError::Timeout(_)) { MSG_TIMEOUT } else { MSG_NETWORK };
                self.inner.notifier.notify(Notice::error(message));
                return Err(err);
            }
        };

        if response.status == 401 {
            let message = Envelope::parse(&response.body)
                .ok()
                .and_then(|env| env.message().map(str::to_owned));
            return Err(self.unauthorized(&method_url(method, &url), message));
        }
        if !response.is_success() {
            return Err(self.http_failure(method, &url, &response));
        }

        let envelope = match Envelope::parse(&response.body) {
            Ok(envelope) => envelope,
            Err(err) => {
                leptos::logging::warn!("{method} {url} returned a non-envelope body: {err}");
                self.inner.notifier.notify(Notice::error(MSG_MALFORMED));
                return Err(err);
            }
        };

        if envelope.code == UNAUTHORIZED_CODE {
            let message = envelope.message().map(str::to_owned);
            return Err(self.unauthorized(&method_url(method, &url), message));
        }
        if !envelope.is_success() {
            let message = envelope.message().unwrap_or(MSG_GENERIC).to_owned();
            leptos::logging::warn!("{method} {url} rejected: code={} message={message}", envelope.code);
            self.inner.notifier.notify(Notice::error(message.clone()));
            return Err(ApiError::Business { code: envelope.code, message });
        }
        Ok(envelope)
    }

    fn unauthorized(&self, request: &str, message: Option<String>) -> ApiError {
        leptos::logging::log!("{request} unauthorized; clearing session");
        self.inner.session.clear();
        self.inner.notifier.notify(Notice::error(message.clone().unwrap_or_else(|| MSG_UNAUTHORIZED.to_owned())));
        self.inner.navigator.navigate(LOGIN_PATH);
        ApiError::Unauthorized(message.unwrap_or_else(|| MSG_UNAUTHORIZED.to_owned()))
    }

    fn http_failure(&self, method: &str, url: &str, response: &RawResponse) -> ApiError {
        let backend_message = Envelope::parse(&response.body)
            .ok()
            .and_then(|env| env.message().map(str::to_owned));
        let message = status_message(response.status, backend_message);
        leptos::logging::warn!("{method} {url} failed with status {}: {message}", response.status);
        self.inner.notifier.notify(Notice::error(message.clone()));
        ApiError::Http { status: response.status, message }
    }
}

fn method_url(method: &str, url: &str) -> String {
    format!("{method} {url}")
}

/// User-facing text for a non-2xx, non-401 status.
fn status_message(status: u16, backend_message: Option<String>) -> String {
    match status {
        403 => MSG_FORBIDDEN.to_owned(),
        404 => MSG_NOT_FOUND.to_owned(),
        500 => MSG_SERVER.to_owned(),
        _ => backend_message.unwrap_or_else(|| MSG_GENERIC.to_owned()),
    }
}
