//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::aggregator::DEFAULT_FRESHNESS_MS;
use crate::nasa::NasaConfig as NasaClientConfig;

/// The NEO feed endpoint accepts at most a seven day window
pub const MAX_NEO_DAYS: u32 = 7;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub nasa: NasaConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![
                "http://localhost:8084".to_string(),
                "http://127.0.0.1:8084".to_string(),
            ],
        }
    }
}

/// Upstream NASA API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NasaConfig {
    #[serde(default = "default_api_key")]
    pub api_key: String,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_images_url")]
    pub images_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_api_key() -> String {
    "DEMO_KEY".to_string()
}

fn default_api_url() -> String {
    "https://api.nasa.gov".to_string()
}

fn default_images_url() -> String {
    "https://images-api.nasa.gov".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for NasaConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            api_url: default_api_url(),
            images_url: default_images_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl NasaConfig {
    /// Settings for the upstream HTTP client
    pub fn client_config(&self) -> NasaClientConfig {
        NasaClientConfig {
            api_url: self.api_url.clone(),
            images_url: self.images_url.clone(),
            api_key: self.api_key.clone(),
            request_timeout_ms: self.request_timeout_secs * 1000,
        }
    }
}

/// Dashboard content configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Search term for the media library panel
    #[serde(default = "default_media_query")]
    pub media_query: String,

    /// Days of NEO data to fetch, starting today
    #[serde(default = "default_neo_days")]
    pub neo_days: u32,

    /// How long a complete snapshot is served from cache
    #[serde(default = "default_freshness")]
    pub freshness_secs: u64,
}

fn default_media_query() -> String {
    "nebula".to_string()
}

fn default_neo_days() -> u32 {
    MAX_NEO_DAYS
}

fn default_freshness() -> u64 {
    (DEFAULT_FRESHNESS_MS / 1000) as u64
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            media_query: default_media_query(),
            neo_days: default_neo_days(),
            freshness_secs: default_freshness(),
        }
    }
}

impl DashboardConfig {
    /// NEO window length, clamped to what the feed endpoint accepts
    pub fn neo_window_days(&self) -> u32 {
        self.neo_days.clamp(1, MAX_NEO_DAYS)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("skywatch").join("config.toml")),
            Some(PathBuf::from("/etc/skywatch/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(host) = var("SKYWATCH_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("SKYWATCH_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // NASA overrides
        if let Some(key) = var("SKYWATCH_NASA_API_KEY") {
            self.nasa.api_key = key;
        }
        if let Some(url) = var("SKYWATCH_NASA_API_URL") {
            self.nasa.api_url = url;
        }
        if let Some(url) = var("SKYWATCH_IMAGES_API_URL") {
            self.nasa.images_url = url;
        }

        // Dashboard overrides
        if let Some(query) = var("SKYWATCH_MEDIA_QUERY") {
            self.dashboard.media_query = query;
        }

        // Logging overrides
        if let Some(level) = var("SKYWATCH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("SKYWATCH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Skywatch Configuration
#
# Environment variables override these settings:
# - SKYWATCH_API_HOST
# - SKYWATCH_API_PORT
# - SKYWATCH_NASA_API_KEY
# - SKYWATCH_NASA_API_URL
# - SKYWATCH_IMAGES_API_URL
# - SKYWATCH_MEDIA_QUERY
# - SKYWATCH_LOG_LEVEL
# - SKYWATCH_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8082

# Allowed CORS origins (empty = allow any)
cors_origins = ["http://localhost:8084", "http://127.0.0.1:8084"]

[nasa]
# api.nasa.gov key (DEMO_KEY is heavily rate limited)
api_key = "DEMO_KEY"

# Upstream base URLs
api_url = "https://api.nasa.gov"
images_url = "https://images-api.nasa.gov"

# Upstream request timeout in seconds
request_timeout_secs = 10

[dashboard]
# Search term for the media library panel
media_query = "nebula"

# Days of near-Earth object data, starting today (1-7)
neo_days = 7

# How long a complete dashboard snapshot is cached (seconds)
freshness_secs = 300

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
