//! Tech News Digest — Binary Entrypoint
//! One-shot run: build the aggregator against the real scrape provider,
//! fetch a personalized digest for the field given on the command line
//! (or the generic front page with no argument), and print it.

use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tech_news_digest::{
    render_default, Aggregator, FieldTable, FirecrawlProvider, SourceRegistry,
};

const PER_SOURCE_LIMIT: u32 = 2;
const FRONT_PAGE_LIMIT: u32 = 5;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op elsewhere.
    let _ = dotenvy::dotenv();
    init_tracing();

    let api_key = std::env::var("FIRECRAWL_API_KEY")
        .map_err(|_| anyhow::anyhow!("FIRECRAWL_API_KEY is required but not set"))?;
    let provider = Arc::new(FirecrawlProvider::new(api_key)?);

    let registry = SourceRegistry::load_default();
    let fields = FieldTable::load_default();
    let aggregator = Aggregator::new(registry, fields, provider);

    let field = std::env::args().nth(1);
    let message = match field {
        Some(field) => {
            tracing::info!(field = %field, "fetching personalized digest");
            let result = aggregator.personalize(&field, PER_SOURCE_LIMIT).await;
            render_default(&result)
        }
        None => {
            tracing::info!("fetching generic front page");
            let result = aggregator.front_page(FRONT_PAGE_LIMIT).await;
            render_default(&result)
        }
    };

    println!("{message}");
    Ok(())
}
