use tracing::{error, info};
use tracing_subscriber::prelude::*;

use feed_aggregator::{ApiClient, Config, FeedService};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,feed_aggregator=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "feed aggregation failed");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env().map_err(anyhow::Error::msg)?;

    info!(base_url = %config.api.base_url, "configuration loaded");

    let client = ApiClient::new(&config)?;
    let service = FeedService::new(client);

    let feed = service.build_feed().await?;

    info!(posts = feed.len(), "feed assembled");

    println!("{}", serde_json::to_string_pretty(&feed)?);

    Ok(())
}
