//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{CacheInfo, HealthResponse, UpstreamInfo};
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe. Upstream outages are reported per panel in
/// the dashboard payload, so readiness only needs a usable configuration.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if config_is_usable(&state) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status with upstream and cache details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let age_seconds = state.cache_age_seconds().await;
    let fresh = state.fresh_snapshot().await.is_some();

    let status = if config_is_usable(&state) {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        source: state.source.name().to_string(),
        upstream: UpstreamInfo {
            api_url: state.config.api_url.clone(),
            images_url: state.config.images_url.clone(),
        },
        cache: CacheInfo {
            fresh,
            age_seconds,
            ttl_seconds: state.config.cache_ttl.as_secs(),
        },
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn config_is_usable(state: &AppState) -> bool {
    let config = &state.config;
    !config.api_url.is_empty() && !config.images_url.is_empty() && !config.media_query.is_empty()
}
