//! `/books/*` endpoints: catalogue search, detail and admin maintenance.

use serde_json::Value;

use super::{paged, send_unit};
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::ApiRequest;
use crate::net::types::{Book, BookFilter, BookForm, BookQuery, Page, PageRequest};

pub const DEFAULT_POPULAR_LIMIT: u32 = 10;
pub const DEFAULT_RELATED_LIMIT: u32 = 5;

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_book_detail(api: &ApiClient, book_id: i64) -> Result<Book, ApiError> {
    api.send(ApiRequest::get(format!("/books/{book_id}"))).await
}

/// `GET /books/search` with the non-blank filters as query parameters.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn search_books(api: &ApiClient, filter: &BookFilter, page: PageRequest) -> Result<Page<Book>, ApiError> {
    let request = ApiRequest::get("/books/search")
        .query_opt("bookName", filter.book_name.as_deref())
        .query_opt("author", filter.author.as_deref())
        .query_opt("isbn", filter.isbn.as_deref())
        .query_opt("category", filter.category.as_deref())
        .query_opt("branchId", filter.branch_id)
        .query_opt("bookType", filter.book_type.as_deref())
        .query_opt("status", filter.status.as_deref());
    api.send(paged(request, page)).await
}

/// `POST /books/query`, the structured catalogue query.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn query_books(api: &ApiClient, filter: &BookFilter, page: PageRequest) -> Result<Page<Book>, ApiError> {
    api.send(ApiRequest::post("/books/query").json(&BookQuery::new(filter, page))?).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_book_categories(api: &ApiClient) -> Result<Vec<String>, ApiError> {
    api.send(ApiRequest::get("/books/categories")).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_popular_books(api: &ApiClient, limit: u32) -> Result<Vec<Book>, ApiError> {
    api.send(ApiRequest::get("/books/popular").query("limit", limit)).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_new_books(api: &ApiClient, limit: u32) -> Result<Vec<Book>, ApiError> {
    api.send(ApiRequest::get("/books/new").query("limit", limit)).await
}

/// Borrow statistics for one book. The shape is backend-defined.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_book_borrow_stats(api: &ApiClient, book_id: i64) -> Result<Value, ApiError> {
    api.send(ApiRequest::get(format!("/books/{book_id}/stats"))).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn add_book(api: &ApiClient, book: &BookForm) -> Result<Book, ApiError> {
    api.send(ApiRequest::post("/books").json(book)?).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn update_book(api: &ApiClient, book_id: i64, book: &BookForm) -> Result<Book, ApiError> {
    api.send(ApiRequest::put(format!("/books/{book_id}")).json(book)?).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn delete_book(api: &ApiClient, book_id: i64) -> Result<(), ApiError> {
    send_unit(api, ApiRequest::delete(format!("/books/{book_id}"))).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_book_inventory(api: &ApiClient, book_id: i64) -> Result<Value, ApiError> {
    api.send(ApiRequest::get(format!("/books/{book_id}/inventory"))).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn update_book_inventory(api: &ApiClient, book_id: i64, inventory: &Value) -> Result<Value, ApiError> {
    api.send(ApiRequest::put(format!("/books/{book_id}/inventory")).json(inventory)?).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_related_books(api: &ApiClient, book_id: i64, limit: u32) -> Result<Vec<Book>, ApiError> {
    api.send(ApiRequest::get(format!("/books/{book_id}/related")).query("limit", limit)).await
}
