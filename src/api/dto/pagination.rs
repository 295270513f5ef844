//! Pagination query parameters for the collection endpoint.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Page size used when the client does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Largest page size served; bigger requests are truncated to it.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Pagination query parameters (`?pageNumber=&pageSize=`).
///
/// Uses `serde_with` to parse numbers from query strings.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_number: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<i64>,
}

impl PaginationParams {
    /// Validates the parameters and returns `(page_number, page_size)`.
    ///
    /// # Defaults
    ///
    /// - `pageNumber`: 0 (zero-based)
    /// - `pageSize`: [`DEFAULT_PAGE_SIZE`]
    ///
    /// # Validation
    ///
    /// - Page number must be >= 0
    /// - Page size must be > 0; values above [`MAX_PAGE_SIZE`] are truncated
    pub fn validate_and_get_page(&self) -> Result<(i64, i64), String> {
        let page_number = self.page_number.unwrap_or(0);
        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page_number < 0 {
            return Err("pageNumber must not be negative".to_string());
        }

        if page_size <= 0 {
            return Err("pageSize must be greater than 0".to_string());
        }

        let page_size = page_size.min(MAX_PAGE_SIZE);

        if page_number.checked_mul(page_size).is_none() {
            return Err("pageNumber is too large".to_string());
        }

        Ok((page_number, page_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page_number: Option<i64>, page_size: Option<i64>) -> PaginationParams {
        PaginationParams {
            page_number,
            page_size,
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(
            params(None, None).validate_and_get_page().unwrap(),
            (0, DEFAULT_PAGE_SIZE)
        );
    }

    #[test]
    fn test_custom_page_and_size() {
        assert_eq!(
            params(Some(3), Some(50)).validate_and_get_page().unwrap(),
            (3, 50)
        );
    }

    #[test]
    fn test_large_page_size_is_truncated() {
        assert_eq!(
            params(None, Some(20_000)).validate_and_get_page().unwrap(),
            (0, MAX_PAGE_SIZE)
        );
    }

    #[test]
    fn test_negative_page_size_is_error() {
        assert!(params(None, Some(-200)).validate_and_get_page().is_err());
        assert!(params(None, Some(0)).validate_and_get_page().is_err());
    }

    #[test]
    fn test_negative_page_number_is_error() {
        assert!(params(Some(-200), None).validate_and_get_page().is_err());
    }

    #[test]
    fn test_overflowing_offset_is_error() {
        assert!(params(Some(i64::MAX), Some(2)).validate_and_get_page().is_err());
    }

    #[test]
    fn test_deserialize_camel_case_query() {
        let p: PaginationParams =
            serde_json::from_str(r#"{"pageNumber": "2", "pageSize": "30"}"#).unwrap();
        assert_eq!(p.page_number, Some(2));
        assert_eq!(p.page_size, Some(30));
    }

    #[test]
    fn test_deserialize_absent_fields() {
        let p: PaginationParams = serde_json::from_str("{}").unwrap();
        assert!(p.page_number.is_none());
        assert!(p.page_size.is_none());
    }

    #[test]
    fn test_deserialize_non_numeric_is_error() {
        assert!(serde_json::from_str::<PaginationParams>(r#"{"pageSize": "lots"}"#).is_err());
    }
}
