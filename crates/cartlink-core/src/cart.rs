//! Output types for a cart-link build: per-domain links, per-variant items,
//! and per-URL errors.

use serde::{Deserialize, Serialize};

/// A combined add-to-cart URL for one storefront domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLink {
    /// Scheme and host, e.g. `"https://shop.com"`.
    pub domain: String,
    /// e.g. `"https://shop.com/cart/111:1,222:1"`.
    pub url: String,
}

/// One collected variant, kept for callers that show per-item detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub domain: String,
    /// Product title, or `"Product (Variant)"` when the variant has a real title.
    pub title: String,
    pub quantity: u32,
    /// Single-variant cart URL, e.g. `"https://shop.com/cart/111:1"`.
    pub link: String,
}

/// Why a single input URL could not contribute to a cart link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingErrorKind {
    HandleNotFound,
    DomainExtractionFailed,
    FetchFailed,
    ResponseParseFailed,
}

/// A failure tied to one input URL. Never fatal to the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingError {
    pub source_url: String,
    pub kind: ProcessingErrorKind,
    pub message: String,
}

impl std::fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.source_url, self.message)
    }
}

/// Everything produced by one pass over a batch of product URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartReport {
    /// One link per domain, in the order each domain was first seen.
    pub links: Vec<CartLink>,
    pub items: Vec<CartItem>,
    /// In input order.
    pub errors: Vec<ProcessingError>,
}

impl CartReport {
    /// Returns `true` when no input URL failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the link for `domain`, if one was built.
    #[must_use]
    pub fn link_for(&self, domain: &str) -> Option<&CartLink> {
        self.links.iter().find(|l| l.domain == domain)
    }
}
