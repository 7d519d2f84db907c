//! Gateway binary entry point.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use verify_gateway::{GatewayConfig, GatewayService};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GatewayConfig::from_env();
    let service = GatewayService::new(config)?;
    service.run().await?;
    Ok(())
}
