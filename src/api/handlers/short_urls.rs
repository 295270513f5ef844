//! Handlers for short url management endpoints (list, find, create, delete).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
};
use serde_json::json;

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::short_url::{CreateShortUrlRequest, DeleteShortUrlResponse, ShortUrlResource};
use crate::error::AppError;
use crate::state::AppState;

/// Lists stored short urls one page at a time.
///
/// # Endpoint
///
/// `GET /short-urls`
///
/// # Query Parameters
///
/// - `pageNumber` (optional): Zero-based page number (default: 0)
/// - `pageSize` (optional): Items per page (default: 20, truncated to 100)
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid.
pub async fn list_short_urls_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<ShortUrlResource>>, AppError> {
    let (page_number, page_size) = params
        .validate_and_get_page()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let short_urls = state
        .short_url_service
        .list(page_number, page_size)
        .await?;

    Ok(Json(
        short_urls
            .into_iter()
            .map(|short_url| ShortUrlResource::new(short_url, &state.base_url))
            .collect(),
    ))
}

/// Returns a single short url.
///
/// # Endpoint
///
/// `GET /short-urls/{path}`
///
/// # Errors
///
/// Returns 404 Not Found if no short url has this exact path.
pub async fn find_short_url_handler(
    Path(short_url_path): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShortUrlResource>, AppError> {
    let short_url = state.short_url_service.find_by_path(&short_url_path).await?;

    Ok(Json(ShortUrlResource::new(short_url, &state.base_url)))
}

/// Creates a short url with a generated path.
///
/// # Endpoint
///
/// `POST /short-urls`
///
/// # Request Body
///
/// ```json
/// { "redirectTo": "www.example.com" }
/// ```
///
/// `shortUrlPath` is assigned by the server and must be absent or null.
///
/// # Errors
///
/// Returns 409 Conflict if the body sets `shortUrlPath`, whatever `redirectTo` holds.
/// Returns 400 Bad Request if `redirectTo` is missing, not a string, or invalid.
/// Returns 500 if no unique path could be generated.
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateShortUrlRequest>,
) -> Result<(StatusCode, HeaderMap, Json<ShortUrlResource>), AppError> {
    if payload.sets_short_url_path() {
        return Err(AppError::conflict(
            "shortUrlPath is assigned by the server and cannot be set",
            json!({ "field": "shortUrlPath" }),
        ));
    }

    let create = payload.into_create()?;

    let short_url = state
        .short_url_service
        .create(&create.redirect_to)
        .await?;

    let resource = ShortUrlResource::new(short_url, &state.base_url);

    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&resource.links.self_link.href) {
        headers.insert(header::LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(resource)))
}

/// Deletes a short url by path.
///
/// # Endpoint
///
/// `DELETE /short-urls/{path}`
///
/// # Errors
///
/// Returns 404 Not Found if no short url has this exact path.
pub async fn delete_short_url_handler(
    Path(short_url_path): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteShortUrlResponse>, AppError> {
    state
        .short_url_service
        .delete_by_path(&short_url_path)
        .await?;

    Ok(Json(DeleteShortUrlResponse {
        short_url_path,
        deleted: 1,
    }))
}
