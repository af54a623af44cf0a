//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the backend base
//! path and request timeout are baked in from compile-time env vars
//! (`LIBRARY_API_BASE`, `LIBRARY_API_TIMEOUT_MS`) with proxy-friendly defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_TIMEOUT_MS: u32 = 15_000;

/// Error returned when a configured value cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("api base must be an absolute path or http(s) URL: {0:?}")]
    InvalidApiBase(String),
    #[error("timeout must be a positive integer of milliseconds: {0:?}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base path or absolute origin every request path is appended to, without
    /// a trailing slash (e.g. `/api` or `http://localhost:8080/api`).
    pub api_base: String,
    /// Fixed per-request timeout. Expiry is reported as a network failure.
    pub timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), timeout_ms: DEFAULT_TIMEOUT_MS }
    }
}

impl ClientConfig {
    /// Build config from the compile-time environment.
    ///
    /// Optional:
    /// - `LIBRARY_API_BASE`: default `/api`
    /// - `LIBRARY_API_TIMEOUT_MS`: default 15000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a provided value is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("LIBRARY_API_BASE"), option_env!("LIBRARY_API_TIMEOUT_MS"))
    }

    /// Build config from raw optional values; `None` or blank selects the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a provided value is malformed.
    pub fn from_values(api_base: Option<&str>, timeout_ms: Option<&str>) -> Result<Self, ConfigError> {
        let api_base = match api_base.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => normalize_api_base(raw)?,
            None => DEFAULT_API_BASE.to_owned(),
        };
        let timeout_ms = match timeout_ms.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => parse_timeout(raw)?,
            None => DEFAULT_TIMEOUT_MS,
        };
        Ok(Self { api_base, timeout_ms })
    }

    /// Join a request path (leading slash optional) onto the base.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return self.api_base.clone();
        }
        format!("{}/{path}", self.api_base)
    }
}

fn normalize_api_base(raw: &str) -> Result<String, ConfigError> {
    let is_absolute_url = raw.starts_with("http://") || raw.starts_with("https://");
    if !raw.starts_with('/') && !is_absolute_url {
        return Err(ConfigError::InvalidApiBase(raw.to_owned()));
    }
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        // A bare "/" means the backend is mounted at the origin root.
        return Ok(String::new());
    }
    Ok(trimmed.to_owned())
}

fn parse_timeout(raw: &str) -> Result<u32, ConfigError> {
    match raw.parse::<u32>() {
        Ok(ms) if ms > 0 => Ok(ms),
        _ => Err(ConfigError::InvalidTimeout(raw.to_owned())),
    }
}
