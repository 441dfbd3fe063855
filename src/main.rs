use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flowcase::config::AppConfig;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flowcase=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Flowcase case motion editor");

    let config = AppConfig::default();
    config.validate()?;

    flowcase::ui::run(config).map_err(|e| anyhow::anyhow!("failed to run the UI: {e}"))?;

    Ok(())
}
