use std::sync::Arc;

use anyhow::Context;
use climate_server::configs::Settings;
use climate_server::run;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Arc::new(Settings::new().context("Failed to load settings.")?);

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => settings
            .logger
            .env_filter()
            .with_context(|| format!("Invalid logger level {:?}", settings.logger.level))?,
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    run(&settings).await
}
