//! HTTP Basic credential attached to every authenticated request.
//!
//! The backend authenticates each request with `Authorization: Basic
//! base64(username:password)`; there is no server-issued token. The encoded
//! string is what gets persisted, so rehydration validates it before trusting it.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::error::ApiError;

/// Basic auth splits `user:pass` at the first colon, so a username cannot hold one.
pub const MSG_USERNAME_COLON: &str = "Username must not contain ':'.";

/// Whether `username` can be carried in a Basic credential.
#[must_use]
pub fn is_basic_username(username: &str) -> bool {
    !username.is_empty() && !username.contains(':')
}

/// Base64 `username:password` pair. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    encoded: String,
}

impl Credential {
    /// Encode a username/password pair.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for an empty username or one
    /// containing `:`, which would decode as a different user.
    pub fn basic(username: &str, password: &str) -> Result<Self, ApiError> {
        if username.is_empty() {
            return Err(ApiError::Validation("Username must not be empty.".to_owned()));
        }
        if username.contains(':') {
            return Err(ApiError::Validation(MSG_USERNAME_COLON.to_owned()));
        }
        Ok(Self { encoded: STANDARD.encode(format!("{username}:{password}")) })
    }

    /// Same user with a new password, e.g. after a password change.
    #[must_use]
    pub fn with_password(&self, password: &str) -> Option<Self> {
        Self::basic(&self.username()?, password).ok()
    }

    /// Accept a previously persisted encoded value.
    ///
    /// Returns `None` unless the value is base64 of UTF-8 text containing a `:`
    /// with a non-empty username.
    #[must_use]
    pub fn from_encoded(encoded: &str) -> Option<Self> {
        let encoded = encoded.trim();
        let decoded = STANDARD.decode(encoded).ok()?;
        let text = String::from_utf8(decoded).ok()?;
        let (username, _) = text.split_once(':')?;
        if username.is_empty() {
            return None;
        }
        Some(Self { encoded: encoded.to_owned() })
    }

    /// The value stored under the credential key.
    #[must_use]
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// Full `Authorization` header value.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Basic {}", self.encoded)
    }

    /// Username part, for display and logging.
    #[must_use]
    pub fn username(&self) -> Option<String> {
        let decoded = STANDARD.decode(&self.encoded).ok()?;
        let text = String::from_utf8(decoded).ok()?;
        text.split_once(':').map(|(user, _)| user.to_owned())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username())
            .finish_non_exhaustive()
    }
}
