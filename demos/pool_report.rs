//! Prints factory totals, cumulative protocol volume, and a Bollinger band
//! for one pool as JSON.
//!
//! Optional environment variables:
//! - `SUBGRAPH_CONFIG` path to a TOML config (otherwise defaults + `SUBGRAPH_*`)
//! - `SUBGRAPH_POOL` pool address (defaults to the USDC/WETH 0.05% pool)
//! - `SUBGRAPH_BAND_HOURS` look-back window in hours (defaults to 24)

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use univ3_data::{LookbackHours, SubgraphConfig};

const USDC_WETH_005: &str = "0x88e6a0c2ddd26feeb64f039a2c41296fcb3f5640";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::var("SUBGRAPH_CONFIG") {
        Ok(path) => SubgraphConfig::from_file(path)?,
        Err(_) => SubgraphConfig::from_env()?,
    };
    let client = config.build_client()?;

    let pool = std::env::var("SUBGRAPH_POOL").unwrap_or_else(|_| USDC_WETH_005.to_string());
    let hours: u32 = match std::env::var("SUBGRAPH_BAND_HOURS") {
        Ok(raw) => raw.parse().context("SUBGRAPH_BAND_HOURS must be an integer")?,
        Err(_) => 24,
    };
    let hours = LookbackHours::from_u32(hours).context("SUBGRAPH_BAND_HOURS must be positive")?;

    let summary = client.factory().summary().await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    let cumulative = client.days().cumulative_volume().await?;
    if let Some(last) = cumulative.last() {
        println!(
            "{} days of volume, {:.2} USD through {}",
            cumulative.len(),
            last.cumulative_volume_usd,
            last.date
        );
    }

    let bands = client.swaps().bollinger_bands(&pool, hours).await?;
    println!("{}", serde_json::to_string_pretty(&bands)?);
    Ok(())
}
