//! Handler for short url redirect.

use std::sync::LazyLock;

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use regex::Regex;
use serde_json::json;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

static SHORT_URL_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

/// Redirects a short url path to its stored destination.
///
/// # Endpoint
///
/// `GET /{path}`
///
/// # Request Flow
///
/// 1. Reject paths outside the token alphabet as not found
/// 2. Look up the record by exact path
/// 3. Re-check the stored destination as a URI and header value
/// 4. Return 301 Moved Permanently with `Location` set to the destination
///
/// # Errors
///
/// Returns 404 Not Found if the path is malformed or unknown.
/// Returns 422 Unprocessable Entity if the stored destination is unusable.
pub async fn redirect_handler(
    Path(short_url_path): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !SHORT_URL_PATH_RE.is_match(&short_url_path) {
        tracing::debug!(short_url_path, "Redirect path outside token alphabet");
        return Err(AppError::not_found(
            "Short url not found",
            json!({ "shortUrlPath": short_url_path }),
        ));
    }

    let short_url = state
        .short_url_service
        .find_by_path(&short_url_path)
        .await
        .inspect_err(|e| {
            if matches!(e, AppError::NotFound { .. }) {
                tracing::warn!(short_url_path, "Redirect for unknown short url");
            }
        })?;

    let location = location_header(&short_url.redirect_to).ok_or_else(|| {
        tracing::error!(
            short_url_path,
            redirect_to = %short_url.redirect_to,
            "Stored destination is not a valid URI"
        );
        AppError::unprocessable(
            "Stored redirect destination is invalid",
            json!({ "shortUrlPath": short_url_path }),
        )
    })?;

    tracing::debug!(short_url_path, redirect_to = %short_url.redirect_to, "Redirecting");

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` value for a stored destination.
///
/// The destination is used as stored when it is already a valid URI. Otherwise
/// its WHATWG serialization is used, which punycodes internationalized hosts and
/// percent-encodes non-ASCII path characters.
fn location_header(redirect_to: &str) -> Option<HeaderValue> {
    as_location(redirect_to).or_else(|| {
        let parsed = Url::parse(redirect_to).ok()?;
        as_location(parsed.as_str())
    })
}

fn as_location(uri: &str) -> Option<HeaderValue> {
    uri.parse::<Uri>().ok()?;
    HeaderValue::from_str(uri).ok()
}
