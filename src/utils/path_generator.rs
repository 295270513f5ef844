//! Short path generation.
//!
//! A path is a random unsigned 64-bit value written in base 62 using the
//! alphabet `0-9A-Za-z`, most significant digit first. The goal is a large
//! collision space, not unpredictability; collisions are handled by the
//! caller's insert-and-retry loop.

use rand::Rng;

/// Base-62 digit alphabet. Digit value `n` is `BASE62_ALPHABET[n]`.
pub const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Number of base-62 digits needed for `u64::MAX`.
pub const MAX_PATH_LENGTH: usize = 11;

/// Source of new short paths.
///
/// Injected into [`crate::application::services::ShortUrlService`] so tests can
/// supply fixed or colliding paths.
#[cfg_attr(test, mockall::automock)]
pub trait PathGenerator: Send + Sync {
    /// Returns a new path. Consecutive calls are not required to differ.
    fn generate(&self) -> String;
}

/// Generates paths from the thread-local random number generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct Base62PathGenerator;

impl Base62PathGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl PathGenerator for Base62PathGenerator {
    fn generate(&self) -> String {
        let value: u64 = rand::rng().random();
        let path = encode_base62(value);
        tracing::trace!(value, path = %path, "Generated short url path");
        path
    }
}

/// Writes `value` in base 62, most significant digit first.
///
/// Zero encodes as `"0"`; `u64::MAX` encodes to [`MAX_PATH_LENGTH`] digits.
///
/// # Examples
///
/// ```
/// use short_url::utils::path_generator::encode_base62;
///
/// assert_eq!(encode_base62(0), "0");
/// assert_eq!(encode_base62(61), "z");
/// assert_eq!(encode_base62(62), "10");
/// ```
pub fn encode_base62(mut value: u64) -> String {
    let base = BASE62_ALPHABET.len() as u64;
    let mut digits = Vec::with_capacity(MAX_PATH_LENGTH);

    loop {
        digits.push(BASE62_ALPHABET[(value % base) as usize]);
        value /= base;
        if value == 0 {
            break;
        }
    }

    digits.reverse();
    // Every byte comes from the ASCII alphabet.
    digits.into_iter().map(char::from).collect()
}
