use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use dematel_engine::adapters::build_app;
use dematel_engine::config::AppConfig;
use dematel_engine::domain::dematel::Codebook;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    for (term, pair) in Codebook::entries() {
        debug!(
            term = %term,
            expected_value = %pair.expected_value(),
            "codebook entry"
        );
    }

    let app = build_app(&config)?;
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(
        %addr,
        timeout_secs = config.server.request_timeout_secs,
        max_order = config.analysis.max_order,
        "DEMATEL engine listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
