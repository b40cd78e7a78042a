use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::app::create_app;
use crate::configs::Settings;

pub mod app;
pub mod configs;
pub mod errors;
pub mod handles;
pub mod headers;
pub mod services;

/// Serves the reading API until the listener fails.
pub async fn run(settings: &Arc<Settings>) -> anyhow::Result<()> {
    let app = create_app(settings);

    let address = settings.server.address()?;

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    tracing::info!("listening on {:?}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
