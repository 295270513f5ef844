//! Business logic services for the application layer.

pub mod short_url_service;

pub use short_url_service::{DEFAULT_MAX_PATH_GENERATION_ATTEMPTS, ShortUrlService};
