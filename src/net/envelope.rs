//! The `{code, message, data}` wrapper every backend response is sent in.
//!
//! DESIGN
//! ======
//! The backend is inconsistent about `message` vs `msg` and sends `data` as
//! absent, `null`, or a payload. Parsing normalizes all of that into one
//! tagged [`ApiOutcome`] so no caller inspects raw JSON fields.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::error::ApiError;

pub const SUCCESS_CODE: i64 = 200;
pub const UNAUTHORIZED_CODE: i64 = 401;

/// Raw envelope as received on the wire.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub code: i64,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    pub data: Value,
}

/// Decoded result of one backend call.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiOutcome<T> {
    Success { data: T, message: String },
    Failure { code: i64, message: String },
}

impl Envelope {
    /// Parse a response body into an envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body is not an envelope object.
    pub fn parse(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Human-readable message, preferring `message` over `msg`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.msg.as_deref())
            .filter(|m| !m.trim().is_empty())
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Convert into a typed outcome, decoding `data` only on success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when a successful envelope's `data` does not
    /// match `T`.
    pub fn into_outcome<T: DeserializeOwned>(self) -> Result<ApiOutcome<T>, ApiError> {
        let message = self.message().unwrap_or_default().to_owned();
        if !self.is_success() {
            let message = if message.is_empty() { "request failed".to_owned() } else { message };
            return Ok(ApiOutcome::Failure { code: self.code, message });
        }
        let data = serde_json::from_value(self.data).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(ApiOutcome::Success { data, message })
    }
}

impl<T> ApiOutcome<T> {
    /// Collapse into the unwrapped `data` or the matching [`ApiError`].
    ///
    /// # Errors
    ///
    /// Code 401 becomes [`ApiError::Unauthorized`]; every other failure code
    /// becomes [`ApiError::Business`].
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            Self::Success { data, .. } => Ok(data),
            Self::Failure { code: UNAUTHORIZED_CODE, message } => Err(ApiError::Unauthorized(message)),
            Self::Failure { code, message } => Err(ApiError::Business { code, message }),
        }
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float.abs() < 1e15
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected numeric code, got {s:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
