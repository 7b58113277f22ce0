//! NASA REST API Client
//!
//! HTTP client for the APOD, NeoWs and Image Library APIs.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::SpaceDataSource;
use crate::model::{FeaturedImage, MediaLibraryResult, NearEarthObjectFeed};

/// NASA REST API client
pub struct NasaClient {
    client: Client,
    config: NasaConfig,
}

/// Configuration for the NASA client
#[derive(Debug, Clone)]
pub struct NasaConfig {
    /// Base URL for APOD and NeoWs (e.g., "https://api.nasa.gov")
    pub api_url: String,
    /// Base URL for the image library (e.g., "https://images-api.nasa.gov")
    pub images_url: String,
    /// api.nasa.gov key; `DEMO_KEY` works with a low hourly limit
    pub api_key: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for NasaConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.nasa.gov".to_string(),
            images_url: "https://images-api.nasa.gov".to_string(),
            api_key: "DEMO_KEY".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

impl NasaClient {
    /// Create a new NASA client with the given configuration
    pub fn new(config: NasaConfig) -> Result<Self, NasaError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .user_agent(concat!("Skywatch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &NasaConfig {
        &self.config
    }

    fn apod_url(&self) -> String {
        format!(
            "{}/planetary/apod?api_key={}",
            self.config.api_url.trim_end_matches('/'),
            urlencoding::encode(&self.config.api_key)
        )
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search?q={}&media_type=image,video",
            self.config.images_url.trim_end_matches('/'),
            urlencoding::encode(query)
        )
    }

    fn feed_url(&self, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}/neo/rest/v1/feed?start_date={}&end_date={}&api_key={}",
            self.config.api_url.trim_end_matches('/'),
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d"),
            urlencoding::encode(&self.config.api_key)
        )
    }

    /// GET a JSON document, mapping transport and status failures
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, NasaError> {
        let response = self.client.get(url).send().await.map_err(classify)?;
        let response = check_status(response).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| NasaError::Decode(e.to_string()))
    }
}

#[async_trait]
impl SpaceDataSource for NasaClient {
    fn name(&self) -> &str {
        "nasa"
    }

    async fn featured_image(&self) -> Result<FeaturedImage, NasaError> {
        tracing::debug!("Fetching APOD");
        self.get_json(&self.apod_url()).await
    }

    async fn search_media(&self, query: &str) -> Result<MediaLibraryResult, NasaError> {
        tracing::debug!(query = %query, "Searching media library");
        self.get_json(&self.search_url(query)).await
    }

    async fn neo_feed(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<NearEarthObjectFeed, NasaError> {
        tracing::debug!(%start, %end, "Fetching NEO feed");
        self.get_json(&self.feed_url(start, end)).await
    }
}

fn classify(e: reqwest::Error) -> NasaError {
    if e.is_timeout() {
        NasaError::Timeout
    } else if e.is_connect() {
        NasaError::Unavailable
    } else {
        NasaError::Request(e)
    }
}

async fn check_status(response: Response) -> Result<Response, NasaError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());
        tracing::warn!(?retry_after, "NASA API rate limit reached");
        return Err(NasaError::RateLimited);
    }

    let body = match response.text().await {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::debug!(error = %e, "Failed to read NASA error body");
            None
        }
    };
    Err(NasaError::ApiError {
        status: status.as_u16(),
        message: error_message(status, body.as_deref()),
    })
}

/// Upstream error text, falling back to the status reason when the body is unusable
fn error_message(status: StatusCode, body: Option<&str>) -> String {
    body.map(summarize_body)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string())
}

/// Pull a readable message out of an upstream error body
fn summarize_body(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct Envelope {
        error: Option<ErrorBody>,
        msg: Option<String>,
        reason: Option<String>,
    }

    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    if let Ok(envelope) = serde_json::from_str::<Envelope>(body) {
        let message = envelope
            .error
            .and_then(|e| e.message)
            .or(envelope.msg)
            .or(envelope.reason);
        if let Some(message) = message {
            return message;
        }
    }

    let trimmed = body.trim();
    if trimmed.len() > 200 {
        let cut = (0..=200).rev().find(|i| trimmed.is_char_boundary(*i)).unwrap_or(0);
        format!("{}...", &trimmed[..cut])
    } else {
        trimmed.to_string()
    }
}

// ============================================
// Errors
// ============================================

/// Errors that can occur when calling the NASA APIs
#[derive(Error, Debug)]
pub enum NasaError {
    #[error("NASA API unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("NASA API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("API rate limit exceeded (429)")]
    RateLimited,

    #[error("Unexpected response format: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::is_rate_limited;

    fn client() -> NasaClient {
        NasaClient::new(NasaConfig {
            api_key: "my key".to_string(),
            api_url: "https://api.nasa.gov/".to_string(),
            ..NasaConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = NasaConfig::default();
        assert_eq!(config.api_url, "https://api.nasa.gov");
        assert_eq!(config.images_url, "https://images-api.nasa.gov");
        assert_eq!(config.api_key, "DEMO_KEY");
    }

    #[test]
    fn test_urls() {
        let client = client();
        assert_eq!(client.apod_url(), "https://api.nasa.gov/planetary/apod?api_key=my%20key");
        assert_eq!(
            client.search_url("crab nebula"),
            "https://images-api.nasa.gov/search?q=crab%20nebula&media_type=image,video"
        );

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(
            client.feed_url(start, end),
            "https://api.nasa.gov/neo/rest/v1/feed?start_date=2024-01-01&end_date=2024-01-07&api_key=my%20key"
        );
    }

    #[test]
    fn test_rate_limit_message_is_detectable() {
        assert!(is_rate_limited(&NasaError::RateLimited.to_string()));
        assert!(!is_rate_limited(&NasaError::Timeout.to_string()));
    }

    #[test]
    fn test_summarize_body() {
        assert_eq!(
            summarize_body(r#"{"error":{"code":"API_KEY_INVALID","message":"An invalid api_key was supplied."}}"#),
            "An invalid api_key was supplied."
        );
        assert_eq!(summarize_body(r#"{"code":400,"msg":"Date must be between"}"#), "Date must be between");
        assert_eq!(summarize_body(r#"{"reason":"No results"}"#), "No results");
        assert_eq!(summarize_body("  Bad Gateway \n"), "Bad Gateway");
        assert_eq!(summarize_body(&"x".repeat(300)).len(), 203);
    }

    #[test]
    fn test_error_message_falls_back_to_status_reason() {
        assert_eq!(error_message(StatusCode::BAD_GATEWAY, None), "Bad Gateway");
        assert_eq!(error_message(StatusCode::SERVICE_UNAVAILABLE, Some("  ")), "Service Unavailable");
        assert_eq!(
            error_message(StatusCode::BAD_REQUEST, Some(r#"{"msg":"Date must be between"}"#)),
            "Date must be between"
        );
    }
}
