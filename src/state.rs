//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShortUrlService;

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub short_url_service: Arc<ShortUrlService>,
    /// Public base URL used to build resource links.
    pub base_url: String,
}

impl AppState {
    pub fn new(short_url_service: Arc<ShortUrlService>, base_url: impl Into<String>) -> Self {
        Self {
            short_url_service,
            base_url: base_url.into(),
        }
    }
}
