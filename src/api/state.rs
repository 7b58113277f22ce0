//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::config::Config;
use crate::model::DashboardSnapshot;
use crate::nasa::SpaceDataSource;

/// A complete snapshot and when it was assembled
#[derive(Debug, Clone)]
pub struct CachedSnapshot {
    pub snapshot: DashboardSnapshot,
    pub fetched_at: Instant,
}

impl CachedSnapshot {
    pub fn age(&self) -> Duration {
        self.fetched_at.elapsed()
    }
}

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Upstream data source for the three panels
    pub source: Arc<dyn SpaceDataSource>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Last fully populated dashboard snapshot
    pub cache: Arc<RwLock<Option<CachedSnapshot>>>,
}

impl AppState {
    pub fn new(source: Arc<dyn SpaceDataSource>, config: ApiConfig) -> Self {
        Self {
            source,
            config: Arc::new(config),
            start_time: Instant::now(),
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Cached snapshot, if still inside the freshness window
    pub async fn fresh_snapshot(&self) -> Option<DashboardSnapshot> {
        let cache = self.cache.read().await;
        cache
            .as_ref()
            .filter(|cached| cached.age() < self.config.cache_ttl)
            .map(|cached| cached.snapshot.clone())
    }

    /// Age of the cached snapshot in seconds, fresh or not
    pub async fn cache_age_seconds(&self) -> Option<u64> {
        self.cache.read().await.as_ref().map(|c| c.age().as_secs())
    }

    pub async fn store_snapshot(&self, snapshot: DashboardSnapshot) {
        *self.cache.write().await = Some(CachedSnapshot {
            snapshot,
            fetched_at: Instant::now(),
        });
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Allowed CORS origins; empty allows any origin
    pub cors_origins: Vec<String>,
    /// Search term for the media library panel
    pub media_query: String,
    /// Days of NEO data to request, starting today
    pub neo_days: u32,
    /// How long a complete snapshot is served from cache
    pub cache_ttl: Duration,
    /// Upstream base URLs, reported by the health endpoint
    pub api_url: String,
    pub images_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Derive the server settings from the loaded configuration file
    pub fn from_config(config: &Config) -> Self {
        Self {
            host: config.api.host.clone(),
            port: config.api.port,
            cors_origins: config.api.cors_origins.clone(),
            media_query: config.dashboard.media_query.clone(),
            neo_days: config.dashboard.neo_window_days(),
            cache_ttl: Duration::from_secs(config.dashboard.freshness_secs),
            api_url: config.nasa.api_url.clone(),
            images_url: config.nasa.images_url.clone(),
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_config() {
        let config = ApiConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:8082");
        assert_eq!(config.media_query, "nebula");
        assert_eq!(config.neo_days, 7);
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_custom_host_port() {
        let config = ApiConfig::new("127.0.0.1", 9999);
        assert_eq!(config.addr(), "127.0.0.1:9999");
    }
}
