//! HTTP client for Shopify's public `products/<handle>.js` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::aggregate::ProductSource;
use crate::error::ScraperError;
use crate::reference::ProductReference;
use crate::types::ShopifyProduct;

/// HTTP client for Shopify's public per-product `.js` endpoint.
///
/// Each fetch is a single GET. 404 and other non-2xx responses come back as
/// typed errors, and nothing is retried: a failed product is reported by the
/// caller and the batch moves on.
pub struct ShopifyClient {
    client: Client,
}

impl ShopifyClient {
    /// Creates a `ShopifyClient`.
    ///
    /// `timeout_secs` sets an overall request timeout; `None` keeps reqwest's
    /// default. `user_agent` is sent as the `User-Agent` header when set.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: Option<u64>, user_agent: Option<&str>) -> Result<Self, ScraperError> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(ua) = user_agent {
            builder = builder.user_agent(ua);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Fetches one product's variant data from
    /// `<domain>/products/<handle>.js`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidProductUrl`] — the endpoint URL cannot be parsed.
    /// - [`ScraperError::NotFound`] — HTTP 404.
    /// - [`ScraperError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ScraperError::Http`] — network, TLS or timeout failure.
    /// - [`ScraperError::Deserialize`] — body is not JSON or not product-shaped.
    pub async fn fetch_product(
        &self,
        reference: &ProductReference,
    ) -> Result<ShopifyProduct, ScraperError> {
        let url = Self::product_url(reference)?;
        tracing::debug!(%url, "fetching product");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<ShopifyProduct>(&body).map_err(|e| ScraperError::Deserialize {
            context: format!("product {} from {}", reference.handle, reference.domain),
            source: e,
        })
    }

    /// Builds the `.js` endpoint URL for a product reference.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidProductUrl`] if the result is not a
    /// valid absolute URL.
    fn product_url(reference: &ProductReference) -> Result<Url, ScraperError> {
        let raw = format!("{}/products/{}.js", reference.domain, reference.handle);
        Url::parse(&raw).map_err(|e| ScraperError::InvalidProductUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl ProductSource for ShopifyClient {
    async fn fetch(&self, reference: &ProductReference) -> Result<ShopifyProduct, ScraperError> {
        self.fetch_product(reference).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
