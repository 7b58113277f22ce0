//! Skywatch API Server
//!
//! Run with: cargo run --bin skywatch
//!
//! # Configuration
//!
//! Settings are read from `config.toml` (see `skywatch-cli config`) and
//! overridden by environment variables:
//! - `SKYWATCH_API_HOST`, `SKYWATCH_API_PORT`: bind address (default: 0.0.0.0:8082)
//! - `SKYWATCH_NASA_API_KEY`: api.nasa.gov key (default: DEMO_KEY)
//! - `SKYWATCH_MEDIA_QUERY`: media library search term (default: nebula)
//! - `SKYWATCH_LOG_LEVEL`, `SKYWATCH_LOG_FORMAT`: logging (default: info, pretty)
//! - `RUST_LOG`: takes precedence over the configured log level

use anyhow::Context;
use skywatch::api::{serve, ApiConfig, AppState};
use skywatch::config::{Config, LoggingConfig};
use skywatch::nasa::NasaClient;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config.logging);

    tracing::info!("Starting Skywatch API server v{}", env!("CARGO_PKG_VERSION"));

    if config.nasa.api_key == "DEMO_KEY" {
        tracing::warn!("Using DEMO_KEY; set SKYWATCH_NASA_API_KEY to avoid rate limiting");
    }

    let client = NasaClient::new(config.nasa.client_config())
        .context("Failed to build NASA HTTP client")?;
    tracing::info!(
        api_url = %client.config().api_url,
        images_url = %client.config().images_url,
        "NASA client ready"
    );

    let api_config = ApiConfig::from_config(&config);
    tracing::info!(
        media_query = %api_config.media_query,
        neo_days = api_config.neo_days,
        cache_ttl_secs = api_config.cache_ttl.as_secs(),
        "Dashboard settings"
    );

    let state = AppState::new(Arc::new(client), api_config.clone());

    serve(state, &api_config).await.context("API server failed")?;

    tracing::info!("Skywatch API server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("skywatch={},tower_http=debug", logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
