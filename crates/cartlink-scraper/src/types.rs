//! Shopify response types for the public `products/<handle>.js` endpoint.
//!
//! ## Observed shape
//!
//! The `.js` endpoint returns a single product object (not wrapped in a
//! `"product"` key like `.json`). Only the fields needed to build cart links
//! are modelled; everything else is ignored.
//!
//! ### `variants[].id`
//! Numeric on every store seen so far, but some proxies and headless
//! frontends re-serialize IDs as strings. Both forms are accepted and kept as
//! the decimal string that goes into the cart URL. `null`, `""` and `0` are
//! treated as "no id" and the variant is skipped.
//!
//! ### `variants[].title`
//! `"Default Title"` for single-variant products; otherwise the option
//! combination, e.g. `"M / Red"`.

use serde::{Deserialize, Deserializer};

/// Placeholder title Shopify gives the only variant of an option-less product.
pub const DEFAULT_VARIANT_TITLE: &str = "Default Title";

/// Used when the product JSON has no usable `title`.
pub const UNNAMED_PRODUCT: &str = "Unnamed Product";

/// A product as returned by `GET /products/<handle>.js`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyProduct {
    /// Display name, e.g. `"Shirt"`. May be absent on malformed stores.
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub handle: Option<String>,

    /// All purchasable variants, in storefront order. Required: a body
    /// without this array is not a product.
    pub variants: Vec<ShopifyVariant>,
}

impl ShopifyProduct {
    /// Trimmed product title, or [`UNNAMED_PRODUCT`] when missing or blank.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(UNNAMED_PRODUCT)
    }
}

/// A single purchasable variant of a [`ShopifyProduct`].
#[derive(Debug, Clone, Deserialize)]
pub struct ShopifyVariant {
    /// Variant ID as a decimal string; `None` when absent, null, empty or zero.
    #[serde(default, deserialize_with = "deserialize_variant_id")]
    pub id: Option<String>,

    #[serde(default)]
    pub title: Option<String>,
}

impl ShopifyVariant {
    /// Human-readable line-item title.
    ///
    /// `"Shirt (M / Red)"` when the variant has a real title, plain `"Shirt"`
    /// when it is blank or Shopify's `"Default Title"` placeholder.
    #[must_use]
    pub fn display_title(&self, product_title: &str) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() && t != DEFAULT_VARIANT_TITLE => {
                format!("{product_title} ({t})")
            }
            _ => product_title.to_owned(),
        }
    }
}

fn deserialize_variant_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            let is_zero = n.as_u64() == Some(0) || n.as_i64() == Some(0);
            Ok((!is_zero).then(|| n.to_string()))
        }
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_owned()))
        }
        Some(other) => Err(D::Error::custom(format!(
            "variant id must be a number or string, got {other}"
        ))),
    }
}
