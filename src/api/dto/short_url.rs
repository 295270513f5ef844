//! DTOs for the short url endpoints.
//!
//! Responses wrap the record with hypermedia links built from the route
//! templates. The surrogate id and timestamps are never exposed.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use validator::Validate;

use crate::api::routes::SHORT_URLS_PATH;
use crate::domain::entities::ShortUrl;
use crate::error::AppError;

/// Request body for `POST /short-urls`.
///
/// Fields are kept as raw JSON so a client-set `shortUrlPath` is reported
/// before the type of `redirectTo` is looked at.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlRequest {
    /// Destination URL; a scheme is added if missing.
    #[serde(default)]
    pub redirect_to: Option<Value>,

    /// Server-assigned. Accepted only so a client that sets it can be rejected.
    #[serde(default)]
    pub short_url_path: Option<Value>,
}

/// Validated create input.
#[derive(Debug, Validate)]
pub struct CreateShortUrl {
    #[validate(length(min = 1, max = 2048, message = "redirectTo must be 1-2048 characters"))]
    pub redirect_to: String,
}

impl CreateShortUrlRequest {
    /// Returns true if the client tried to set the server-assigned path.
    pub fn sets_short_url_path(&self) -> bool {
        self.short_url_path.is_some()
    }

    /// Extracts and validates the destination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `redirectTo` is missing, null, not a
    /// string, or outside 1-2048 characters.
    pub fn into_create(self) -> Result<CreateShortUrl, AppError> {
        let redirect_to = match self.redirect_to {
            Some(Value::String(redirect_to)) => redirect_to,
            None => String::new(),
            Some(other) => {
                return Err(AppError::bad_request(
                    "redirectTo must be a string",
                    json!({ "field": "redirectTo", "value": other }),
                ));
            }
        };

        let create = CreateShortUrl { redirect_to };
        create.validate()?;
        Ok(create)
    }
}

/// Public view of a [`ShortUrl`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlBody {
    pub short_url_path: String,
    pub redirect_to: String,
}

/// A hypermedia link.
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub href: String,
}

/// Links attached to every short url resource.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceLinks {
    #[serde(rename = "self")]
    pub self_link: Link,

    #[serde(rename = "all-urls")]
    pub all_urls: Link,

    pub exec_redirect: Link,
}

/// Short url resource returned by find, list and create.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlResource {
    pub short_url: ShortUrlBody,

    #[serde(rename = "_links")]
    pub links: ResourceLinks,
}

impl ShortUrlResource {
    /// Builds the resource for `short_url`, resolving links against `base_url`.
    pub fn new(short_url: ShortUrl, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let path = &short_url.short_url_path;

        let links = ResourceLinks {
            self_link: Link {
                href: format!("{base_url}{SHORT_URLS_PATH}/{path}"),
            },
            all_urls: Link {
                href: format!("{base_url}{SHORT_URLS_PATH}"),
            },
            exec_redirect: Link {
                href: format!("{base_url}/{path}"),
            },
        };

        Self {
            short_url: ShortUrlBody {
                short_url_path: short_url.short_url_path,
                redirect_to: short_url.redirect_to,
            },
            links,
        }
    }
}

/// Confirmation returned by `DELETE /short-urls/{path}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteShortUrlResponse {
    pub short_url_path: String,
    pub deleted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn short_url() -> ShortUrl {
        let now = Utc::now();
        ShortUrl::new(
            7,
            "abcdABCD1234".to_string(),
            "http://www.google.ie".to_string(),
            now,
            now,
        )
    }

    #[test]
    fn test_resource_serialization_hides_id_and_timestamps() {
        let resource = ShortUrlResource::new(short_url(), "http://sho.rt/");
        let value = serde_json::to_value(&resource).unwrap();

        assert_eq!(
            value,
            json!({
                "shortUrl": {
                    "shortUrlPath": "abcdABCD1234",
                    "redirectTo": "http://www.google.ie"
                },
                "_links": {
                    "self": { "href": "http://sho.rt/short-urls/abcdABCD1234" },
                    "all-urls": { "href": "http://sho.rt/short-urls" },
                    "exec_redirect": { "href": "http://sho.rt/abcdABCD1234" }
                }
            })
        );
    }

    #[test]
    fn test_create_request_without_path() {
        let req: CreateShortUrlRequest =
            serde_json::from_str(r#"{"redirectTo": "www.example.com"}"#).unwrap();
        assert!(!req.sets_short_url_path());
        assert_eq!(req.into_create().unwrap().redirect_to, "www.example.com");
    }

    #[test]
    fn test_create_request_null_path_is_not_set() {
        let req: CreateShortUrlRequest =
            serde_json::from_str(r#"{"redirectTo": "www.example.com", "shortUrlPath": null}"#)
                .unwrap();
        assert!(!req.sets_short_url_path());
    }

    #[test]
    fn test_create_request_with_path_is_set() {
        let req: CreateShortUrlRequest =
            serde_json::from_str(r#"{"redirectTo": "www.example.com", "shortUrlPath": "abc"}"#)
                .unwrap();
        assert!(req.sets_short_url_path());
    }

    #[test]
    fn test_create_request_missing_destination_fails_validation() {
        let req: CreateShortUrlRequest = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            req.into_create().unwrap_err(),
            AppError::Validation { .. }
        ));

        let req: CreateShortUrlRequest =
            serde_json::from_str(r#"{"redirectTo": null}"#).unwrap();
        assert!(matches!(
            req.into_create().unwrap_err(),
            AppError::Validation { .. }
        ));
    }

    #[test]
    fn test_create_request_non_string_destination_fails_validation() {
        let req: CreateShortUrlRequest = serde_json::from_str(r#"{"redirectTo": 5}"#).unwrap();

        match req.into_create().unwrap_err() {
            AppError::Validation { details, .. } => {
                assert_eq!(details["field"], "redirectTo");
                assert_eq!(details["value"], 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_create_request_with_path_and_non_string_destination_deserializes() {
        let req: CreateShortUrlRequest =
            serde_json::from_str(r#"{"redirectTo": 5, "shortUrlPath": "abc"}"#).unwrap();
        assert!(req.sets_short_url_path());
    }

    #[test]
    fn test_create_request_ignores_unknown_fields() {
        let req: CreateShortUrlRequest = serde_json::from_str(
            r#"{"redirectTo": "http://a.example.com", "id": 3, "created": "2019-01-01"}"#,
        )
        .unwrap();
        assert!(!req.sets_short_url_path());
    }
}
