//! Repository trait for short URL data access.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::StoreError;
use async_trait::async_trait;

/// Repository interface for short URL mappings.
///
/// The store owns the surrogate id and timestamps and enforces uniqueness of
/// `short_url_path`. Callers never check for an existing path before inserting;
/// they insert and react to [`StoreError::DuplicatePath`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryShortUrlRepository`] - process-local
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Inserts a new short URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicatePath`] if the path is already taken.
    /// Returns [`StoreError::Database`] on any other failure.
    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, StoreError>;

    /// Finds a short URL by exact path match.
    async fn find_by_path(&self, short_url_path: &str) -> Result<Option<ShortUrl>, StoreError>;

    /// Lists short URLs ordered by id.
    ///
    /// # Arguments
    ///
    /// - `page_number` - Page number (0-indexed)
    /// - `page_size` - Number of items per page
    async fn list(&self, page_number: i64, page_size: i64) -> Result<Vec<ShortUrl>, StoreError>;

    /// Returns true if a record with this path exists.
    async fn exists_by_path(&self, short_url_path: &str) -> Result<bool, StoreError>;

    /// Deletes the record with this path.
    ///
    /// Returns the id of the deleted record, or `None` if nothing matched.
    async fn delete_by_path(&self, short_url_path: &str) -> Result<Option<i64>, StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
