//! Thin per-resource wrappers over [`ApiClient::send`].
//!
//! Each function maps its arguments onto one backend endpoint and returns the
//! unwrapped `data`. Notices, 401 handling and error classification all
//! happen in the client, so callers only decide what to do locally.
//!
//! List endpoints take a zero-based [`PageRequest`] sent as `page`/`size`.

pub mod auth;
pub mod books;
pub mod borrow;
pub mod branches;
pub mod fines;
pub mod notifications;
pub mod reservations;
pub mod users;


use serde_json::Value;

use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::ApiRequest;
use crate::net::types::PageRequest;

fn paged(request: ApiRequest, page: PageRequest) -> ApiRequest {
    request.query("page", page.page).query("size", page.size)
}

/// Send a call whose `data` carries nothing the caller needs.
async fn send_unit(api: &ApiClient, request: ApiRequest) -> Result<(), ApiError> {
    api.send::<Value>(request).await.map(|_| ())
}
