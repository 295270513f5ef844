#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use short_url::application::services::{DEFAULT_MAX_PATH_GENERATION_ATTEMPTS, ShortUrlService};
use short_url::domain::entities::NewShortUrl;
use short_url::domain::repositories::ShortUrlRepository;
use short_url::infrastructure::persistence::InMemoryShortUrlRepository;
use short_url::routes::router;
use short_url::state::AppState;
use short_url::utils::path_generator::{Base62PathGenerator, PathGenerator};

pub const TEST_BASE_URL: &str = "http://sho.rt";

/// Path generator that always yields the same path.
pub struct FixedPathGenerator(pub &'static str);

impl PathGenerator for FixedPathGenerator {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

pub fn create_test_state_with(
    repository: Arc<InMemoryShortUrlRepository>,
    path_generator: Arc<dyn PathGenerator>,
) -> AppState {
    let service = ShortUrlService::new(
        repository,
        path_generator,
        DEFAULT_MAX_PATH_GENERATION_ATTEMPTS,
    );
    AppState::new(Arc::new(service), TEST_BASE_URL)
}

pub fn create_test_state() -> (AppState, Arc<InMemoryShortUrlRepository>) {
    let repository = Arc::new(InMemoryShortUrlRepository::new());
    let state = create_test_state_with(repository.clone(), Arc::new(Base62PathGenerator::new()));
    (state, repository)
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryShortUrlRepository>) {
    let (state, repository) = create_test_state();
    let server = TestServer::new(router(state)).unwrap();
    (server, repository)
}

pub async fn insert_short_url(repository: &InMemoryShortUrlRepository, path: &str, redirect_to: &str) {
    repository
        .create(NewShortUrl {
            short_url_path: path.to_string(),
            redirect_to: redirect_to.to_string(),
        })
        .await
        .unwrap();
}

pub async fn insert_pg_short_url(pool: &PgPool, path: &str, redirect_to: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO short_urls (short_url_path, redirect_to) VALUES ($1, $2) RETURNING id",
    )
    .bind(path)
    .bind(redirect_to)
    .fetch_one(pool)
    .await
    .unwrap()
}
