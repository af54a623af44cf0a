//! `/reservation/*` endpoints (singular on the backend).

use super::{paged, send_unit};
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::ApiRequest;
use crate::net::types::{Page, PageRequest, Reservation, ReservationStatus};

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_my_reservations(api: &ApiClient, page: PageRequest) -> Result<Page<Reservation>, ApiError> {
    api.send(paged(ApiRequest::get("/reservation/my-reservation"), page)).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn cancel_reservation(api: &ApiClient, reservation_id: i64) -> Result<(), ApiError> {
    send_unit(api, ApiRequest::delete(format!("/reservation/cancel/{reservation_id}"))).await
}

/// Queue for a book at a branch; both go as query parameters.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn reserve_book(api: &ApiClient, book_id: i64, branch_id: i64) -> Result<Reservation, ApiError> {
    api.send(
        ApiRequest::post("/reservation/reserve")
            .query("bookId", book_id)
            .query("branchId", branch_id),
    )
    .await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_book_reservation_queue(api: &ApiClient, book_id: i64) -> Result<Vec<Reservation>, ApiError> {
    api.send(ApiRequest::get(format!("/reservation/book/{book_id}/queue"))).await
}

/// Admin confirmation that a reserved copy was collected.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn complete_reservation(api: &ApiClient, reservation_id: i64) -> Result<(), ApiError> {
    send_unit(api, ApiRequest::post(format!("/reservation/{reservation_id}/complete"))).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_all_reservations(
    api: &ApiClient,
    branch_id: Option<i64>,
    status: Option<ReservationStatus>,
    page: PageRequest,
) -> Result<Page<Reservation>, ApiError> {
    let request = ApiRequest::get("/reservation/all")
        .query_opt("branchId", branch_id)
        .query_opt("status", status.map(ReservationStatus::as_str));
    api.send(paged(request, page)).await
}
