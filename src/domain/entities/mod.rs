//! Core domain entities.
//!
//! - [`ShortUrl`] - A stored short path to destination mapping
//! - [`NewShortUrl`] - Input for inserting a new mapping

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrl};
