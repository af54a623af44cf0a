//! `/borrow/*` endpoints.

use serde_json::json;

use super::{paged, send_unit};
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::ApiRequest;
use crate::net::types::{BorrowCreate, BorrowRecord, BorrowStatus, Page, PageRequest};

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn borrow_book(api: &ApiClient, request: &BorrowCreate) -> Result<BorrowRecord, ApiError> {
    api.send(ApiRequest::post("/borrow").json(request)?).await
}

/// Loans still out for the current user.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_my_borrow_list(api: &ApiClient, page: PageRequest) -> Result<Page<BorrowRecord>, ApiError> {
    api.send(paged(ApiRequest::get("/borrow/my-borrow"), page)).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_my_borrow_history(api: &ApiClient, page: PageRequest) -> Result<Page<BorrowRecord>, ApiError> {
    api.send(paged(ApiRequest::get("/borrow/my-history"), page)).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn return_book(api: &ApiClient, borrow_id: i64) -> Result<(), ApiError> {
    send_unit(api, ApiRequest::post(format!("/borrow/return/{borrow_id}"))).await
}

/// Renewal is keyed by book, not by borrow record.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn renew_book(api: &ApiClient, book_id: i64) -> Result<(), ApiError> {
    send_unit(api, ApiRequest::post(format!("/borrow/renew/{book_id}"))).await
}

/// Admin listing, optionally narrowed to a branch and status.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_all_borrow_records(
    api: &ApiClient,
    branch_id: Option<i64>,
    status: Option<BorrowStatus>,
    page: PageRequest,
) -> Result<Page<BorrowRecord>, ApiError> {
    let request = ApiRequest::get("/borrow/all")
        .query_opt("branchId", branch_id)
        .query_opt("status", status.map(BorrowStatus::as_str));
    api.send(paged(request, page)).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn update_borrow_status(api: &ApiClient, borrow_id: i64, status: BorrowStatus) -> Result<(), ApiError> {
    send_unit(
        api,
        ApiRequest::put(format!("/borrow/{borrow_id}/status")).query("status", status.as_str()),
    )
    .await
}

/// # Errors
///
/// Returns [`ApiError::Validation`] for an empty id list without sending.
pub async fn batch_return_books(api: &ApiClient, borrow_ids: &[i64]) -> Result<(), ApiError> {
    if borrow_ids.is_empty() {
        return Err(ApiError::Validation("Select at least one record to return.".to_owned()));
    }
    send_unit(api, ApiRequest::post("/borrow/batch-return").json(&json!({ "borrowIds": borrow_ids }))?).await
}
