mod build;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cartlink")]
#[command(about = "Turn Shopify product URLs into combined add-to-cart links")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build one cart link per storefront from a comma-separated URL list
    Build {
        /// Product URLs, comma-separated. Read from stdin when omitted.
        urls: Option<String>,

        /// Also list every collected variant with its own single-item link
        #[arg(long)]
        items: bool,

        /// Print the full report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = cartlink_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Build { urls, items, json }) => {
            let format = if json {
                output::Format::Json
            } else {
                output::Format::Text { items }
            };
            build::run_build(&config, urls, format).await?;
        }
        None => println!("cartlink ready; run `cartlink build --help` to get started"),
    }

    Ok(())
}
