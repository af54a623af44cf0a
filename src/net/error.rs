//! Error taxonomy for backend calls.
//!
//! DESIGN
//! ======
//! Every API helper returns `Result<T, ApiError>`. The variants carry enough to
//! render a notice; `FailureKind` collapses them into the four classes the UI
//! reacts to (network, auth, business, validation).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Coarse classification used by callers and the notice layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Transport failure or timeout. Retrying the action may succeed.
    Network,
    /// 401 from the backend. The session has already been cleared.
    Auth,
    /// Backend rejected the request (non-200 envelope or HTTP error status).
    Business,
    /// Input was rejected locally; no request was sent.
    Validation,
}

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// No response within the configured timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    /// HTTP 401 or envelope code 401.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// Non-2xx HTTP status other than 401.
    #[error("request failed with status {status}: {message}")]
    Http { status: u16, message: String },
    /// Well-formed envelope whose `code` is not 200.
    #[error("{message}")]
    Business { code: i64, message: String },
    /// Body could not be parsed as an envelope or its `data` as the expected type.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Caller input rejected before sending.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Network(_) | Self::Timeout(_) => FailureKind::Network,
            Self::Unauthorized(_) => FailureKind::Auth,
            Self::Http { .. } | Self::Business { .. } | Self::Decode(_) => FailureKind::Business,
            Self::Validation(_) => FailureKind::Validation,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.kind() == FailureKind::Auth
    }
}

/// Failure reported by a [`Transport`](super::transport::Transport) before any
/// HTTP status is available.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request could not be sent: {0}")]
    Send(String),
    #[error("response body could not be read: {0}")]
    Body(String),
    #[error("timed out after {0} ms")]
    Timeout(u32),
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout(ms) => Self::Timeout(ms),
            other => Self::Network(other.to_string()),
        }
    }
}
