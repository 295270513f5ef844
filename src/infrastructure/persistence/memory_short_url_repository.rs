//! In-memory implementation of the short url repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::StoreError;

#[derive(Debug, Default)]
struct Tables {
    next_id: i64,
    rows: BTreeMap<i64, ShortUrl>,
    path_index: HashMap<String, i64>,
}

/// Process-local repository keyed by surrogate id with a unique index on path.
///
/// Inserts take the write lock for the whole check-and-insert, so concurrent
/// writers racing on the same path see exactly one success and
/// [`StoreError::DuplicatePath`] for the rest.
#[derive(Debug, Default)]
pub struct InMemoryShortUrlRepository {
    tables: RwLock<Tables>,
}

impl InMemoryShortUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.tables.read().await.rows.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.tables.read().await.rows.is_empty()
    }
}

#[async_trait]
impl ShortUrlRepository for InMemoryShortUrlRepository {
    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, StoreError> {
        let mut tables = self.tables.write().await;

        if tables.path_index.contains_key(&new_short_url.short_url_path) {
            return Err(StoreError::DuplicatePath(new_short_url.short_url_path));
        }

        tables.next_id += 1;
        let id = tables.next_id;
        let now = Utc::now();
        let short_url = ShortUrl::new(
            id,
            new_short_url.short_url_path,
            new_short_url.redirect_to,
            now,
            now,
        );

        tables
            .path_index
            .insert(short_url.short_url_path.clone(), id);
        tables.rows.insert(id, short_url.clone());

        Ok(short_url)
    }

    async fn find_by_path(&self, short_url_path: &str) -> Result<Option<ShortUrl>, StoreError> {
        let tables = self.tables.read().await;

        Ok(tables
            .path_index
            .get(short_url_path)
            .and_then(|id| tables.rows.get(id))
            .cloned())
    }

    async fn list(&self, page_number: i64, page_size: i64) -> Result<Vec<ShortUrl>, StoreError> {
        let skip = usize::try_from(page_number.saturating_mul(page_size)).unwrap_or(0);
        let take = usize::try_from(page_size).unwrap_or(0);

        Ok(self
            .tables
            .read()
            .await
            .rows
            .values()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn exists_by_path(&self, short_url_path: &str) -> Result<bool, StoreError> {
        Ok(self
            .tables
            .read()
            .await
            .path_index
            .contains_key(short_url_path))
    }

    async fn delete_by_path(&self, short_url_path: &str) -> Result<Option<i64>, StoreError> {
        let mut tables = self.tables.write().await;

        let Some(id) = tables.path_index.remove(short_url_path) else {
            return Ok(None);
        };
        tables.rows.remove(&id);

        Ok(Some(id))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
