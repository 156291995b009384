//! `cartlink build` — fetch every product and print the resulting links.
//!
//! Per-URL failures are part of the printed report, not a command failure;
//! the command only errors when it cannot read input or build the client.

use std::io::{BufRead, Write};

use cartlink_scraper::{CartAggregator, ShopifyClient};

use crate::output::{self, Format};

pub(crate) async fn run_build(
    config: &cartlink_core::AppConfig,
    urls: Option<String>,
    format: Format,
) -> anyhow::Result<()> {
    let input = match urls {
        Some(urls) => urls,
        None => prompt_for_urls()?,
    };

    let client = build_shopify_client(config)?;
    let report = CartAggregator::new(client).process(&input).await;

    if !report.is_clean() {
        tracing::debug!(errors = report.errors.len(), "some urls could not be used");
    }

    println!("{}", output::render(&report, format)?);
    Ok(())
}

fn build_shopify_client(config: &cartlink_core::AppConfig) -> anyhow::Result<ShopifyClient> {
    ShopifyClient::new(config.request_timeout_secs, config.user_agent.as_deref())
        .map_err(|e| anyhow::anyhow!("failed to build Shopify client: {e}"))
}

/// Reads one line of comma-separated URLs from stdin, prompting on stderr.
fn prompt_for_urls() -> anyhow::Result<String> {
    let mut stderr = std::io::stderr();
    writeln!(stderr, "Paste Shopify product URLs separated by commas:")?;
    stderr.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
