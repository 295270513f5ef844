//! Redirect destination normalization and structural validation.
//!
//! Destinations are normalized before validation: anything that does not
//! already start with a recognized scheme gets `http://` prepended. Validation
//! is purely syntactic and never touches the network.

use regex::Regex;
use std::net::IpAddr;
use std::sync::LazyLock;
use url::{Host, Url};

/// Scheme prepended to destinations that carry none.
pub const DEFAULT_URL_PROTOCOL: &str = "http://";

/// Schemes accepted by [`validate_redirect_url`].
const SUPPORTED_SCHEMES: &[&str] = &["http", "https", "ftp"];

static URL_WITH_PROTOCOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^(https?|ftp|file)://.*$").unwrap());

static WHITESPACE_OR_CONTROL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\p{Cc}]").unwrap());

static DOMAIN_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$").unwrap());

static TOP_LEVEL_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z]{2,63}|xn--[A-Za-z0-9-]{1,59})$").unwrap());

static PATH_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(/[-\w:@&?=+,.!/~*'%$;()]*)?$").unwrap());

/// Reasons a destination is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RedirectUrlError {
    #[error("URL must not be empty")]
    Empty,

    #[error("URL contains whitespace or control characters")]
    IllegalCharacters,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("Invalid host: {0}")]
    InvalidHost(String),

    #[error("Invalid URL path: {0}")]
    InvalidPath(String),
}

/// Ensures the destination starts with a recognized scheme.
///
/// Strings matching `http://`, `https://`, `ftp://` or `file://`
/// (case-insensitive) are returned unchanged; everything else is prefixed with
/// [`DEFAULT_URL_PROTOCOL`]. Never fails.
///
/// # Examples
///
/// ```
/// use short_url::utils::redirect_url::normalize_redirect_url;
///
/// assert_eq!(normalize_redirect_url("www.example.com"), "http://www.example.com");
/// assert_eq!(normalize_redirect_url("HTtP://www.google.ie"), "HTtP://www.google.ie");
/// ```
pub fn normalize_redirect_url(url: &str) -> String {
    if URL_WITH_PROTOCOL.is_match(url) {
        url.to_string()
    } else {
        format!("{DEFAULT_URL_PROTOCOL}{url}")
    }
}

/// Checks that a normalized destination is a well-formed URL.
///
/// # Rules
///
/// 1. No whitespace or control characters anywhere
/// 2. Parses as an absolute URL
/// 3. Scheme is `http`, `https` or `ftp`
/// 4. Host is an IP literal, `localhost`, or a dotted domain name with an
///    alphabetic top-level label
/// 5. Path uses only unreserved, sub-delimiter and percent-encoded characters
///
/// # Errors
///
/// Returns the first [`RedirectUrlError`] rule the destination breaks.
pub fn validate_redirect_url(url: &str) -> Result<(), RedirectUrlError> {
    if url.is_empty() {
        return Err(RedirectUrlError::Empty);
    }

    if WHITESPACE_OR_CONTROL.is_match(url) {
        return Err(RedirectUrlError::IllegalCharacters);
    }

    let parsed = Url::parse(url).map_err(|e| RedirectUrlError::InvalidFormat(e.to_string()))?;

    if !SUPPORTED_SCHEMES.contains(&parsed.scheme()) {
        return Err(RedirectUrlError::UnsupportedScheme(
            parsed.scheme().to_string(),
        ));
    }

    match parsed.host() {
        None => return Err(RedirectUrlError::MissingHost),
        Some(Host::Domain(domain)) => validate_domain(domain)?,
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => {}
    }

    if !PATH_CHARS.is_match(parsed.path()) {
        return Err(RedirectUrlError::InvalidPath(parsed.path().to_string()));
    }

    Ok(())
}

fn validate_domain(domain: &str) -> Result<(), RedirectUrlError> {
    let domain = domain.strip_suffix('.').unwrap_or(domain);

    if domain.eq_ignore_ascii_case("localhost") || domain.parse::<IpAddr>().is_ok() {
        return Ok(());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let invalid = || RedirectUrlError::InvalidHost(domain.to_string());

    if labels.len() < 2 || !labels.iter().all(|label| DOMAIN_LABEL.is_match(label)) {
        return Err(invalid());
    }

    match labels.last() {
        Some(tld) if TOP_LEVEL_LABEL.is_match(tld) => Ok(()),
        _ => Err(invalid()),
    }
}
