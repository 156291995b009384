//! Parsing of raw product-page URLs into storefront domain + product handle.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ScraperError;

static HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/products/([^/?]+)").expect("valid handle regex"));

static ORIGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:https?)://[^/?#\s]+").expect("valid origin regex"));

/// One caller-supplied product URL, resolved to where its data lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductReference {
    /// The URL exactly as it appeared in the input (after trimming).
    pub raw_url: String,
    /// Scheme and host, e.g. `"https://shop.com"`.
    pub domain: String,
    /// Product slug, e.g. `"red-shirt"`.
    pub handle: String,
}

impl ProductReference {
    /// Extracts the product handle and storefront domain from `raw_url`.
    ///
    /// The handle is the first `/products/<handle>` path segment, so
    /// collection-scoped URLs like `/collections/tops/products/red-shirt` work
    /// too. The domain is the raw `http(s)://host` prefix, kept as written.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::HandleNotFound`] — no `/products/<handle>` segment.
    /// - [`ScraperError::DomainExtractionFailed`] — the URL does not start
    ///   with an `http://` or `https://` scheme and host.
    pub fn parse(raw_url: &str) -> Result<Self, ScraperError> {
        let handle = HANDLE_RE
            .captures(raw_url)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_owned())
            .ok_or_else(|| ScraperError::HandleNotFound {
                url: raw_url.to_owned(),
            })?;

        let domain = extract_store_origin(raw_url)
            .ok_or_else(|| ScraperError::DomainExtractionFailed {
                url: raw_url.to_owned(),
            })?
            .to_owned();

        Ok(Self {
            raw_url: raw_url.to_owned(),
            domain,
            handle,
        })
    }
}

/// Returns the `http(s)://host[:port]` prefix of `url`, if it has one.
///
/// Given `"https://shop.com/products/red-shirt"`, returns `"https://shop.com"`.
#[must_use]
pub fn extract_store_origin(url: &str) -> Option<&str> {
    ORIGIN_RE.find(url).map(|m| m.as_str())
}

/// Splits a comma-separated paste into trimmed, non-empty URL candidates,
/// preserving input order.
#[must_use]
pub fn split_candidate_urls(raw_input: &str) -> Vec<&str> {
    raw_input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
