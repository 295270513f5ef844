//! PostgreSQL repository tests. Run with `DATABASE_URL` set and `--ignored`.

mod common;

use sqlx::PgPool;
use std::sync::Arc;
use short_url::domain::entities::NewShortUrl;
use short_url::domain::repositories::ShortUrlRepository;
use short_url::error::StoreError;
use short_url::infrastructure::persistence::PgShortUrlRepository;

fn new_short_url(path: &str, redirect_to: &str) -> NewShortUrl {
    NewShortUrl {
        short_url_path: path.to_string(),
        redirect_to: redirect_to.to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_short_url(pool: PgPool) {
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    let short_url = repo
        .create(new_short_url("test123", "http://example.com"))
        .await
        .unwrap();

    assert!(short_url.id > 0);
    assert_eq!(short_url.short_url_path, "test123");
    assert_eq!(short_url.redirect_to, "http://example.com");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_duplicate_path(pool: PgPool) {
    common::insert_pg_short_url(&pool, "dup", "http://a.example.com").await;
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    let result = repo.create(new_short_url("dup", "http://b.example.com")).await;

    assert!(matches!(result, Err(StoreError::DuplicatePath(p)) if p == "dup"));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_path(pool: PgPool) {
    let id = common::insert_pg_short_url(&pool, "abc123", "http://example.com").await;
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    let found = repo.find_by_path("abc123").await.unwrap().unwrap();
    assert_eq!(found.id, id);
    assert_eq!(found.redirect_to, "http://example.com");

    assert!(repo.find_by_path("ABC123").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_list_pages(pool: PgPool) {
    for i in 0..5 {
        common::insert_pg_short_url(&pool, &format!("p{i}"), "http://example.com").await;
    }
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    let page: Vec<_> = repo
        .list(1, 2)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.short_url_path)
        .collect();

    assert_eq!(page, vec!["p2", "p3"]);
    assert!(repo.list(5, 2).await.unwrap().is_empty());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_exists_and_delete(pool: PgPool) {
    let id = common::insert_pg_short_url(&pool, "gone", "http://example.com").await;
    let repo = PgShortUrlRepository::new(Arc::new(pool));

    assert!(repo.exists_by_path("gone").await.unwrap());
    assert_eq!(repo.delete_by_path("gone").await.unwrap(), Some(id));
    assert!(!repo.exists_by_path("gone").await.unwrap());
    assert_eq!(repo.delete_by_path("gone").await.unwrap(), None);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_ping(pool: PgPool) {
    let repo = PgShortUrlRepository::new(Arc::new(pool));
    assert!(repo.ping().await.is_ok());
}
