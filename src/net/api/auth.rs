//! `/auth/*` endpoints.
//!
//! Login and register go out without the stored credential: login establishes
//! a new one and register never authenticates.

use super::send_unit;
use crate::net::client::ApiClient;
use crate::net::credential::MSG_USERNAME_COLON;
use crate::net::error::ApiError;
use crate::net::transport::ApiRequest;
use crate::net::types::{LoginRequest, RegisterRequest, UserProfile};

/// `POST /auth/login`. Prefer [`SessionStore::login`](crate::state::session::SessionStore::login),
/// which also stores the session.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn login(api: &ApiClient, request: &LoginRequest) -> Result<UserProfile, ApiError> {
    api.send(ApiRequest::post("/auth/login").anonymous().json(request)?).await
}

/// `POST /auth/register`. Only student and teacher accounts may self-register.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for other user types without sending.
pub async fn register(api: &ApiClient, request: &RegisterRequest) -> Result<UserProfile, ApiError> {
    if !request.user_type.can_self_register() {
        return Err(ApiError::Validation("Only student or teacher accounts can be registered.".to_owned()));
    }
    if request.username.contains(':') {
        return Err(ApiError::Validation(MSG_USERNAME_COLON.to_owned()));
    }
    api.send(ApiRequest::post("/auth/register").anonymous().json(request)?).await
}

/// `GET /auth/current-user`.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn current_user(api: &ApiClient) -> Result<UserProfile, ApiError> {
    api.send(ApiRequest::get("/auth/current-user")).await
}

/// `GET /auth/check-permission/{permission}`, e.g. `user:create`.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn check_permission(api: &ApiClient, permission: &str) -> Result<bool, ApiError> {
    api.send(ApiRequest::get(format!("/auth/check-permission/{permission}"))).await
}

/// `POST /auth/change-password?oldPassword=..&newPassword=..`.
///
/// The stored credential embeds the password, so on success it is re-encoded
/// with the new one; otherwise the next request would 401 and log out.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn change_password(api: &ApiClient, old_password: &str, new_password: &str) -> Result<(), ApiError> {
    if new_password.is_empty() {
        return Err(ApiError::Validation("New password must not be empty.".to_owned()));
    }
    send_unit(
        api,
        ApiRequest::post("/auth/change-password")
            .query("oldPassword", old_password)
            .query("newPassword", new_password),
    )
    .await?;
    let session = api.session();
    if let Some(credential) = session.credential().and_then(|c| c.with_password(new_password)) {
        session.replace_credential(credential);
    }
    Ok(())
}
