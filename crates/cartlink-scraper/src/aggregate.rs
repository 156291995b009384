//! The cart-link pipeline: split a pasted URL list, fetch each product,
//! group variant IDs by storefront, and render one cart URL per storefront.
//!
//! Every input URL either contributes variants or produces exactly one
//! [`ProcessingError`]; a bad URL never aborts the rest of the batch.

use std::collections::HashMap;

use async_trait::async_trait;
use cartlink_core::{CartItem, CartLink, CartReport, ProcessingError};

use crate::error::ScraperError;
use crate::reference::{split_candidate_urls, ProductReference};
use crate::types::ShopifyProduct;

/// Quantity added per variant. Repeated variants append again rather than
/// bumping this.
const LINE_QUANTITY: u32 = 1;

/// Where product data comes from. [`crate::ShopifyClient`] is the real
/// implementation; tests substitute canned responses.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch(&self, reference: &ProductReference) -> Result<ShopifyProduct, ScraperError>;
}

/// Builds combined add-to-cart links from batches of product URLs.
///
/// Holds no state between calls; `process` can be called repeatedly (or
/// concurrently from separate tasks) with independent results.
pub struct CartAggregator<S> {
    source: S,
}

impl<S: ProductSource> CartAggregator<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Runs the whole pipeline over a comma-separated list of product URLs.
    ///
    /// URLs are fetched one at a time in input order, so variant entries and
    /// errors come out in the same order the URLs went in.
    pub async fn process(&self, raw_input: &str) -> CartReport {
        let candidates = split_candidate_urls(raw_input);
        let mut groups = CartGroups::default();
        let mut items: Vec<CartItem> = Vec::new();
        let mut errors: Vec<ProcessingError> = Vec::new();

        for url in &candidates {
            let reference = match ProductReference::parse(url) {
                Ok(r) => r,
                Err(e) => {
                    tracing::debug!(url, error = %e, "skipping url");
                    errors.push(e.to_processing_error(url));
                    continue;
                }
            };

            let product = match self.source.fetch(&reference).await {
                Ok(p) => p,
                Err(e) => {
                    tracing::debug!(url, error = %e, "product fetch failed");
                    errors.push(e.to_processing_error(url));
                    continue;
                }
            };

            collect_variants(&reference, &product, &mut groups, &mut items);
        }

        let links = groups.into_links();
        tracing::info!(
            urls = candidates.len(),
            links = links.len(),
            items = items.len(),
            errors = errors.len(),
            "cart links built"
        );

        CartReport {
            links,
            items,
            errors,
        }
    }
}

/// Appends every variant with an ID to its domain's group and records a
/// display item for it.
fn collect_variants(
    reference: &ProductReference,
    product: &ShopifyProduct,
    groups: &mut CartGroups,
    items: &mut Vec<CartItem>,
) {
    let product_title = product.display_title();
    let mut added = 0usize;

    for variant in &product.variants {
        let Some(id) = variant.id.as_deref() else {
            continue;
        };
        let entry = cart_entry(id, LINE_QUANTITY);
        items.push(CartItem {
            domain: reference.domain.clone(),
            title: variant.display_title(product_title),
            quantity: LINE_QUANTITY,
            link: cart_url(&reference.domain, std::slice::from_ref(&entry)),
        });
        groups.push(&reference.domain, entry);
        added += 1;
    }

    tracing::debug!(
        domain = %reference.domain,
        handle = %reference.handle,
        variants = added,
        "collected variants"
    );
}

/// `"<variant_id>:<quantity>"`, the bulk-add form Shopify's `/cart/` path accepts.
fn cart_entry(variant_id: &str, quantity: u32) -> String {
    format!("{variant_id}:{quantity}")
}

/// Renders `<domain>/cart/<entry>,<entry>,...`.
#[must_use]
pub fn cart_url(domain: &str, entries: &[String]) -> String {
    format!("{domain}/cart/{}", entries.join(","))
}

/// Cart entries accumulated for one storefront domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartGroup {
    pub domain: String,
    /// `"variantId:quantity"` strings in insertion order, duplicates kept.
    pub entries: Vec<String>,
}

/// Per-call domain → group map that remembers first-seen domain order.
#[derive(Debug, Default)]
struct CartGroups {
    groups: Vec<CartGroup>,
    index: HashMap<String, usize>,
}

impl CartGroups {
    fn push(&mut self, domain: &str, entry: String) {
        let idx = if let Some(&idx) = self.index.get(domain) {
            idx
        } else {
            self.groups.push(CartGroup {
                domain: domain.to_owned(),
                entries: Vec::new(),
            });
            let idx = self.groups.len() - 1;
            self.index.insert(domain.to_owned(), idx);
            idx
        };
        self.groups[idx].entries.push(entry);
    }

    /// One link per non-empty group, in first-seen order.
    fn into_links(self) -> Vec<CartLink> {
        self.groups
            .into_iter()
            .filter(|g| !g.entries.is_empty())
            .map(|g| CartLink {
                url: cart_url(&g.domain, &g.entries),
                domain: g.domain,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
