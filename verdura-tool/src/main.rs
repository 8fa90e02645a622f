mod config;
mod error;

#[cfg(feature = "browse")]
mod screen;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use verdura_catalog::{CatalogClient, DisplayItem};

use crate::config::resolve_base_url;
use crate::error::VduError;

#[derive(Parser)]
#[command(name = "vdu")]
#[command(about = "Browse the verdura produce catalog", long_about = None)]
struct Cli {
    /// Base URL of the content API
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[cfg(feature = "browse")]
    /// Browse the catalog in an interactive terminal view
    Browse,

    /// Fetch the catalog once and print it
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = CatalogClient::with_base_url(resolve_base_url(cli.base_url));

    match cli.command {
        #[cfg(feature = "browse")]
        Command::Browse => screen::run(client).await?,
        Command::List => list(client).await?,
    }

    Ok(())
}

async fn list(client: CatalogClient) -> Result<(), VduError> {
    let items = client.fetch_catalog().await?;

    for item in items.into_iter().map(DisplayItem::new) {
        let price = format!("${:.2}/{}", item.derived.effective_price, item.item.unit);
        let was = if item.derived.has_discount {
            format!(" (was ${:.2})", item.item.price)
        } else {
            String::new()
        };
        let featured = if item.item.featured { "  featured" } else { "" };

        println!(
            "{:<20} {:>12}{:<16} {}{}",
            item.item.name, price, was, item.derived.stock_status, featured
        );
    }

    Ok(())
}
