//! Short url resource routes.

use crate::api::handlers::{
    create_short_url_handler, delete_short_url_handler, find_short_url_handler,
    list_short_urls_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Collection path for short url resources.
pub const SHORT_URLS_PATH: &str = "/short-urls";

/// Short url management routes.
///
/// # Endpoints
///
/// - `GET    /short-urls`         - List short urls (paginated)
/// - `POST   /short-urls`         - Create a short url
/// - `GET    /short-urls/{path}`  - Fetch one short url
/// - `DELETE /short-urls/{path}`  - Delete a short url
pub fn short_url_routes() -> Router<AppState> {
    Router::new()
        .route(
            SHORT_URLS_PATH,
            get(list_short_urls_handler).post(create_short_url_handler),
        )
        .route(
            "/short-urls/{path}",
            get(find_short_url_handler).delete(delete_short_url_handler),
        )
}
