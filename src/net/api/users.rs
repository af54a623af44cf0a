//! `/users/*` endpoints (admin screens).

use super::{paged, send_unit};
use crate::net::client::ApiClient;
use crate::net::credential::MSG_USERNAME_COLON;
use crate::net::error::ApiError;
use crate::net::transport::ApiRequest;
use crate::net::types::{Page, PageRequest, UserForm, UserProfile, UserStatus, UserType};

/// Sort key the backend uses when none is given.
pub const DEFAULT_SORT: &str = "id";

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_user_list(api: &ApiClient, page: PageRequest, sort: Option<&str>) -> Result<Page<UserProfile>, ApiError> {
    let request = paged(ApiRequest::get("/users"), page).query("sort", sort.unwrap_or(DEFAULT_SORT));
    api.send(request).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_user_by_id(api: &ApiClient, user_id: i64) -> Result<UserProfile, ApiError> {
    api.send(ApiRequest::get(format!("/users/{user_id}"))).await
}

/// Blank keywords are omitted, which lists everyone.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn search_users(api: &ApiClient, keyword: &str, page: PageRequest) -> Result<Page<UserProfile>, ApiError> {
    let request = ApiRequest::get("/users/search").query_opt("keyword", Some(keyword.trim()));
    api.send(paged(request, page)).await
}

/// The status is a path segment here, not a body.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn update_user_status(api: &ApiClient, user_id: i64, status: UserStatus) -> Result<(), ApiError> {
    send_unit(api, ApiRequest::patch(format!("/users/{user_id}/status/{}", status.as_str()))).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn delete_user(api: &ApiClient, user_id: i64) -> Result<(), ApiError> {
    send_unit(api, ApiRequest::delete(format!("/users/{user_id}"))).await
}

/// Create (`POST /users`) when `form.id` is unset, update
/// (`PUT /users/{id}`) otherwise.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when creating without a username or
/// password; otherwise propagates the [`ApiError`] of the call.
pub async fn save_user(api: &ApiClient, form: &UserForm) -> Result<UserProfile, ApiError> {
    let request = match form.id {
        Some(id) => ApiRequest::put(format!("/users/{id}")),
        None => {
            let blank = |v: &Option<String>| v.as_deref().is_none_or(|s| s.trim().is_empty());
            if blank(&form.username) || blank(&form.password) {
                return Err(ApiError::Validation("New users need a username and password.".to_owned()));
            }
            if form.username.as_deref().is_some_and(|name| name.contains(':')) {
                return Err(ApiError::Validation(MSG_USERNAME_COLON.to_owned()));
            }
            ApiRequest::post("/users")
        }
    };
    api.send(request.json(form)?).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn reset_password(api: &ApiClient, user_id: i64) -> Result<(), ApiError> {
    send_unit(api, ApiRequest::post(format!("/users/{user_id}/reset-password"))).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_users_by_type(api: &ApiClient, user_type: UserType) -> Result<Vec<UserProfile>, ApiError> {
    api.send(ApiRequest::get(format!("/users/type/{}", user_type.as_str()))).await
}
