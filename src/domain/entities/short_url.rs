//! ShortUrl entity mapping a generated path to a destination URL.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A stored short URL mapping.
///
/// `short_url_path` is assigned by the path generator and is unique across all
/// records. `redirect_to` always carries an explicit scheme.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ShortUrl {
    pub id: i64,
    pub short_url_path: String,
    pub redirect_to: String,
    pub created: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: i64,
        short_url_path: String,
        redirect_to: String,
        created: DateTime<Utc>,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_url_path,
            redirect_to,
            created,
            last_updated,
        }
    }
}

/// Input data for inserting a new short URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortUrl {
    pub short_url_path: String,
    pub redirect_to: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url_creation() {
        let now = Utc::now();
        let short_url = ShortUrl::new(
            10,
            "abcdABCD1234".to_string(),
            "http://www.google.ie".to_string(),
            now,
            now,
        );

        assert_eq!(short_url.id, 10);
        assert_eq!(short_url.short_url_path, "abcdABCD1234");
        assert_eq!(short_url.redirect_to, "http://www.google.ie");
        assert_eq!(short_url.created, now);
        assert_eq!(short_url.last_updated, now);
    }

    #[test]
    fn test_new_short_url_creation() {
        let new_short_url = NewShortUrl {
            short_url_path: "xyz789".to_string(),
            redirect_to: "https://rust-lang.org".to_string(),
        };

        assert_eq!(new_short_url.short_url_path, "xyz789");
        assert_eq!(new_short_url.redirect_to, "https://rust-lang.org");
    }
}
