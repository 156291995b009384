pub mod aggregate;
pub mod client;
pub mod error;
pub mod reference;
pub mod types;

pub use aggregate::{CartAggregator, ProductSource};
pub use client::ShopifyClient;
pub use error::ScraperError;
pub use reference::{split_candidate_urls, ProductReference};
pub use types::{ShopifyProduct, ShopifyVariant};
