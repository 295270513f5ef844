//! Classification of PostgreSQL errors.

use crate::error::StoreError;

/// Name of the unique constraint on `short_urls.short_url_path`.
pub const SHORT_URL_PATH_CONSTRAINT: &str = "short_urls_short_url_path_key";

/// Returns true if `e` is a unique violation on the short url path column.
///
/// Unique violations on any other constraint are not path collisions and must
/// not be retried.
pub fn is_unique_violation_on_path(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_URL_PATH_CONSTRAINT))
}

/// Maps an insert failure to a [`StoreError`].
pub fn classify_insert_error(e: sqlx::Error, short_url_path: &str) -> StoreError {
    if is_unique_violation_on_path(&e) {
        StoreError::DuplicatePath(short_url_path.to_string())
    } else {
        StoreError::Database(e)
    }
}
