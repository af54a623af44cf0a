//! `/fines/*` endpoints.

use super::{paged, send_unit};
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::ApiRequest;
use crate::net::types::{Fine, Page, PageRequest};

/// Current user's fines, optionally narrowed to one pay status
/// (`paid` / `unpaid`).
///
/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_my_fines(api: &ApiClient, pay_status: Option<&str>, page: PageRequest) -> Result<Page<Fine>, ApiError> {
    api.send(paged(ApiRequest::get("/fines/my-fines").query_opt("payStatus", pay_status), page))
        .await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn pay_fine(api: &ApiClient, fine_id: i64) -> Result<(), ApiError> {
    send_unit(api, ApiRequest::post(format!("/fines/pay/{fine_id}"))).await
}

/// The body is the bare id array.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for an empty id list without sending.
pub async fn batch_pay_fines(api: &ApiClient, fine_ids: &[i64]) -> Result<(), ApiError> {
    if fine_ids.is_empty() {
        return Err(ApiError::Validation("Select at least one fine to pay.".to_owned()));
    }
    send_unit(api, ApiRequest::post("/fines/batch-pay").json(fine_ids)?).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_fine_detail(api: &ApiClient, fine_id: i64) -> Result<Fine, ApiError> {
    api.send(ApiRequest::get(format!("/fines/{fine_id}"))).await
}

/// # Errors
///
/// Returns [`ApiError::Validation`] for a blank reason without sending.
pub async fn apply_fine_reduction(api: &ApiClient, fine_id: i64, reason: &str) -> Result<(), ApiError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ApiError::Validation("A reason is required.".to_owned()));
    }
    send_unit(
        api,
        ApiRequest::post(format!("/fines/{fine_id}/apply-reduction")).query("reason", reason),
    )
    .await
}

/// Admin listing, optionally narrowed to a branch and pay status.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_all_fines(
    api: &ApiClient,
    branch_id: Option<i64>,
    pay_status: Option<&str>,
    page: PageRequest,
) -> Result<Page<Fine>, ApiError> {
    let request = ApiRequest::get("/fines/all")
        .query_opt("branchId", branch_id)
        .query_opt("payStatus", pay_status);
    api.send(paged(request, page)).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn update_fine_status(api: &ApiClient, fine_id: i64, status: &str) -> Result<(), ApiError> {
    send_unit(api, ApiRequest::put(format!("/fines/{fine_id}/status")).query("status", status)).await
}
