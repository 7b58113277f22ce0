//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! The dashboard response itself is [`crate::model::DashboardSnapshot`],
//! which serializes to the composite wire shape.

use serde::{Deserialize, Serialize};

/// Longest accepted media search term
pub const MAX_QUERY_LEN: usize = 100;

// ============================================
// DASHBOARD DTOs
// ============================================

/// Query parameters for `GET /api/v1/dashboard`
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    /// Skip the snapshot cache and fetch from upstream
    #[serde(default)]
    pub refresh: bool,
    /// Media library search term; defaults to the configured query
    pub q: Option<String>,
}

impl DashboardParams {
    /// Validated media search override, if one was given
    pub fn media_query(&self) -> Result<Option<&str>, String> {
        match self.q.as_deref().map(str::trim) {
            None => Ok(None),
            Some("") => Err("q must not be empty".to_string()),
            Some(q) if q.chars().count() > MAX_QUERY_LEN => {
                Err(format!("q must be at most {} characters", MAX_QUERY_LEN))
            }
            Some(q) => Ok(Some(q)),
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Name of the upstream data source
    pub source: String,
    /// Upstream base URLs
    pub upstream: UpstreamInfo,
    /// Cached snapshot state
    pub cache: CacheInfo,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpstreamInfo {
    pub api_url: String,
    pub images_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CacheInfo {
    /// Whether a cached snapshot is inside the freshness window
    pub fresh: bool,
    /// Age of the cached snapshot, if any
    pub age_seconds: Option<u64>,
    pub ttl_seconds: u64,
}
