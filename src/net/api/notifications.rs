//! `/notifications/*` endpoints. Sending is admin-only on the backend.

use super::{paged, send_unit};
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::ApiRequest;
use crate::net::types::{Notification, NotificationDraft, Page, PageRequest};

/// Page size the admin listing uses when the caller has no preference.
pub const ADMIN_PAGE_SIZE: u32 = 20;

/// Newest first.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_my_notifications(api: &ApiClient, page: PageRequest) -> Result<Page<Notification>, ApiError> {
    api.send(paged(ApiRequest::get("/notifications/user"), page)).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_unread_count(api: &ApiClient) -> Result<u64, ApiError> {
    api.send(ApiRequest::get("/notifications/unread-count")).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn mark_as_read(api: &ApiClient, notification_id: i64) -> Result<(), ApiError> {
    send_unit(api, ApiRequest::put(format!("/notifications/mark-read/{notification_id}"))).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn mark_all_as_read(api: &ApiClient) -> Result<(), ApiError> {
    send_unit(api, ApiRequest::put("/notifications/mark-all-read")).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_all_notifications(api: &ApiClient, page: PageRequest) -> Result<Page<Notification>, ApiError> {
    api.send(paged(ApiRequest::get("/notifications/admin/all"), page)).await
}

/// # Errors
///
/// Returns [`ApiError::Validation`] for a blank title without sending.
pub async fn send_system_notification(api: &ApiClient, draft: &NotificationDraft) -> Result<(), ApiError> {
    validate(draft)?;
    send_unit(api, ApiRequest::post("/notifications/admin/system").json(draft)?).await
}

/// # Errors
///
/// Returns [`ApiError::Validation`] for a blank title without sending.
pub async fn send_important_notification(api: &ApiClient, draft: &NotificationDraft) -> Result<(), ApiError> {
    validate(draft)?;
    send_unit(api, ApiRequest::post("/notifications/admin/important").json(draft)?).await
}

fn validate(draft: &NotificationDraft) -> Result<(), ApiError> {
    if draft.title.trim().is_empty() {
        return Err(ApiError::Validation("A notification title is required.".to_owned()));
    }
    Ok(())
}
