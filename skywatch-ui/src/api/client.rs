//! HTTP API Client
//!
//! Fetches the composite dashboard payload from the Skywatch REST API.

use gloo_net::http::Request;
use serde::Deserialize;
use skywatch::{DashboardSnapshot, FetchError};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8082/api/v1";

const API_URL_KEY: &str = "skywatch_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    // Normalize: remove trailing slash
    stored
        .as_deref()
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

/// Error body returned by the API on non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Fetch all three panels in one request
pub async fn fetch_dashboard() -> Result<DashboardSnapshot, FetchError> {
    let url = format!("{}/dashboard", get_api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let message = match response.json::<ApiErrorResponse>().await {
            Ok(body) => body.error.message,
            Err(_) => response.status_text(),
        };
        return Err(FetchError::Status { status, message });
    }

    response
        .json::<DashboardSnapshot>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
