//! PostgreSQL implementation of the short url repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::StoreError;
use crate::utils::db_error::classify_insert_error;

/// PostgreSQL repository for short url storage and retrieval.
///
/// Path uniqueness is enforced by the `short_urls_short_url_path_key`
/// constraint; a violation surfaces as [`StoreError::DuplicatePath`].
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn create(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, StoreError> {
        sqlx::query_as::<_, ShortUrl>(
            r#"
            INSERT INTO short_urls (short_url_path, redirect_to)
            VALUES ($1, $2)
            RETURNING id, short_url_path, redirect_to, created, last_updated
            "#,
        )
        .bind(&new_short_url.short_url_path)
        .bind(&new_short_url.redirect_to)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| classify_insert_error(e, &new_short_url.short_url_path))
    }

    async fn find_by_path(&self, short_url_path: &str) -> Result<Option<ShortUrl>, StoreError> {
        let row = sqlx::query_as::<_, ShortUrl>(
            r#"
            SELECT id, short_url_path, redirect_to, created, last_updated
            FROM short_urls
            WHERE short_url_path = $1
            "#,
        )
        .bind(short_url_path)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn list(&self, page_number: i64, page_size: i64) -> Result<Vec<ShortUrl>, StoreError> {
        let offset = page_number * page_size;

        let rows = sqlx::query_as::<_, ShortUrl>(
            r#"
            SELECT id, short_url_path, redirect_to, created, last_updated
            FROM short_urls
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page_size)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn exists_by_path(&self, short_url_path: &str) -> Result<bool, StoreError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM short_urls WHERE short_url_path = $1)",
        )
        .bind(short_url_path)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn delete_by_path(&self, short_url_path: &str) -> Result<Option<i64>, StoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            "DELETE FROM short_urls WHERE short_url_path = $1 RETURNING id",
        )
        .bind(short_url_path)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
