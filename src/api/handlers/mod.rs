//! HTTP request handlers for API endpoints.

pub mod health;
pub mod redirect;
pub mod short_urls;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use short_urls::{
    create_short_url_handler, delete_short_url_handler, find_short_url_handler,
    list_short_urls_handler,
};
