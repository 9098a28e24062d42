use anyhow::Result;
use stayfinder::StayfinderConfig;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = StayfinderConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    if config.provider.api_key.is_empty() || config.provider.api_host.is_empty() {
        warn!("Provider credentials are not configured; hotel searches will fail");
    }

    stayfinder::web::run(config).await
}
