//! HTTP server exposing a record in every registered format.
//!
//! Configuration is read from the file named by `MULTIFORMAT_CONFIG` and the
//! `MULTIFORMAT_*` environment overrides; log filtering follows `RUST_LOG`.

use anyhow::Context;
use multiformat::config::ServerConfig;
use multiformat::server::{self, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().context("Configuration is malformed")?;
    let state = AppState::from_config(&config);
    config
        .validate(state.registry())
        .context("Configuration does not match the format registry")?;

    server::serve(&config, state)
        .await
        .with_context(|| format!("Server on {} failed", config.bind))
}
