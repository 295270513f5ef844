//! Short URL creation, lookup, and deletion service.

use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::{AppError, StoreError};
use crate::utils::path_generator::PathGenerator;
use crate::utils::redirect_url::{normalize_redirect_url, validate_redirect_url};
use serde_json::json;

/// Default number of insert attempts before giving up on path generation.
pub const DEFAULT_MAX_PATH_GENERATION_ATTEMPTS: u32 = 3;

/// Service orchestrating destination validation, path generation with retry,
/// and store operations.
///
/// Holds no state between requests; all durable state lives in the repository.
/// Path uniqueness is left to the store: the service inserts and retries on a
/// [`StoreError::DuplicatePath`] instead of checking for an existing path first.
pub struct ShortUrlService {
    repository: Arc<dyn ShortUrlRepository>,
    path_generator: Arc<dyn PathGenerator>,
    max_attempts: u32,
}

impl ShortUrlService {
    /// Creates a new short url service.
    ///
    /// `max_attempts` is clamped to at least 1.
    pub fn new(
        repository: Arc<dyn ShortUrlRepository>,
        path_generator: Arc<dyn PathGenerator>,
        max_attempts: u32,
    ) -> Self {
        Self {
            repository,
            path_generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Maximum number of insert attempts per creation.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Lists stored short urls in store order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn list(&self, page_number: i64, page_size: i64) -> Result<Vec<ShortUrl>, AppError> {
        Ok(self.repository.list(page_number, page_size).await?)
    }

    /// Retrieves a short url by exact path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn find_by_path(&self, short_url_path: &str) -> Result<ShortUrl, AppError> {
        self.repository
            .find_by_path(short_url_path)
            .await?
            .ok_or_else(|| {
                tracing::debug!(short_url_path, "Short url not found");
                AppError::not_found(
                    "Short url not found",
                    json!({ "shortUrlPath": short_url_path }),
                )
            })
    }

    /// Creates a short url for `redirect_to` under a freshly generated path.
    ///
    /// # Flow
    ///
    /// 1. Normalize the destination (prepend `http://` when no scheme is present)
    /// 2. Validate it structurally
    /// 3. Up to `max_attempts` times: generate a path and insert; a path
    ///    collision moves on to the next attempt, any other failure is returned
    ///
    /// Exactly `max_attempts` inserts are made when every attempt collides.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the destination is invalid.
    /// Returns [`AppError::GenerationExhausted`] if every attempt collided.
    /// Returns [`AppError::Internal`] on any other store failure.
    pub async fn create(&self, redirect_to: &str) -> Result<ShortUrl, AppError> {
        let redirect_to = normalize_redirect_url(redirect_to);

        if let Err(e) = validate_redirect_url(&redirect_to) {
            tracing::info!(redirect_to = %redirect_to, reason = %e, "Rejected invalid destination");
            return Err(AppError::bad_request(
                "Invalid redirectTo URL",
                json!({ "field": "redirectTo", "value": redirect_to, "reason": e.to_string() }),
            ));
        }

        for attempt in 1..=self.max_attempts {
            let new_short_url = NewShortUrl {
                short_url_path: self.path_generator.generate(),
                redirect_to: redirect_to.clone(),
            };

            match self.repository.create(new_short_url).await {
                Ok(short_url) => {
                    tracing::info!(
                        short_url_path = %short_url.short_url_path,
                        redirect_to = %short_url.redirect_to,
                        attempt,
                        "Created short url"
                    );
                    return Ok(short_url);
                }
                Err(StoreError::DuplicatePath(path)) => {
                    tracing::warn!(
                        short_url_path = %path,
                        "Short url path generation failed to create unique path: {} of {} attempts",
                        attempt,
                        self.max_attempts
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::error!(
            max_attempts = self.max_attempts,
            "Unable to generate unique short url path, max attempts exceeded"
        );

        Err(AppError::generation_exhausted(
            "Unable to generate short url path, max retries exceeded",
            json!({ "attempts": self.max_attempts }),
        ))
    }

    /// Deletes the short url with this path.
    ///
    /// Returns the id of the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches, including when a
    /// concurrent delete removed it between the existence check and the delete.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn delete_by_path(&self, short_url_path: &str) -> Result<i64, AppError> {
        let not_found = || {
            AppError::not_found(
                "Short url not found",
                json!({ "shortUrlPath": short_url_path }),
            )
        };

        if !self.repository.exists_by_path(short_url_path).await? {
            tracing::debug!(short_url_path, "Delete of unknown short url");
            return Err(not_found());
        }

        let id = self
            .repository
            .delete_by_path(short_url_path)
            .await?
            .ok_or_else(not_found)?;

        tracing::info!(short_url_path, id, "Deleted short url");
        Ok(id)
    }

    /// Checks that the backing store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        Ok(self.repository.ping().await?)
    }
}
