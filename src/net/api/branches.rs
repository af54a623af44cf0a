//! `/branches/*` endpoints.

use serde_json::Value;

use super::paged;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::ApiRequest;
use crate::net::types::{Branch, PageRequest};

/// Search radius used when the caller has no preference, in kilometres.
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 10.0;

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_branch_list(api: &ApiClient) -> Result<Vec<Branch>, ApiError> {
    api.send(ApiRequest::get("/branches")).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_branch_detail(api: &ApiClient, branch_id: i64) -> Result<Branch, ApiError> {
    api.send(ApiRequest::get(format!("/branches/{branch_id}"))).await
}

/// Stock held by a branch. The backend decides the payload shape.
///
/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_branch_inventory(api: &ApiClient, branch_id: i64, page: PageRequest) -> Result<Value, ApiError> {
    api.send(paged(ApiRequest::get(format!("/branches/{branch_id}/inventory")), page)).await
}

/// # Errors
///
/// Propagates the [`ApiError`] of the call.
pub async fn get_branch_opening_hours(api: &ApiClient, branch_id: i64) -> Result<Value, ApiError> {
    api.send(ApiRequest::get(format!("/branches/{branch_id}/hours"))).await
}

/// # Errors
///
/// Returns [`ApiError::Validation`] for non-finite coordinates or a
/// non-positive radius without sending.
pub async fn search_nearby_branches(
    api: &ApiClient,
    latitude: f64,
    longitude: f64,
    radius_km: f64,
) -> Result<Vec<Branch>, ApiError> {
    if !latitude.is_finite() || !longitude.is_finite() || !radius_km.is_finite() || radius_km <= 0.0 {
        return Err(ApiError::Validation("Invalid location or radius.".to_owned()));
    }
    api.send(
        ApiRequest::get("/branches/nearby")
            .query("latitude", latitude)
            .query("longitude", longitude)
            .query("radius", radius_km),
    )
    .await
}
