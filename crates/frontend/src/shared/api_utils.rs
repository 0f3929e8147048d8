//! API utilities for frontend-backend communication
//!
//! Resolves server-relative paths (as returned by the processing service)
//! against the configured base address.

use contracts::usecases::common::{UseCaseError, UseCaseResult};
use serde::de::DeserializeOwned;

/// Base URL derived from the current window location, using port 8000 for
/// the processing service.
///
/// Used when the configuration leaves `api.base_url` empty.
/// Returns an empty string if window is not available.
pub fn location_api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Normalize a configured base URL: trailing slashes are dropped
pub fn normalize_base(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Build a full URL from a base and a server-relative path
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("http://localhost:8000", "/download/forecast_df.csv");
/// assert_eq!(url, "http://localhost:8000/download/forecast_df.csv");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Разбор JSON-тела ответа в DTO; ошибка разбора даёт `UseCaseError::Decode`
pub fn decode_json<T: DeserializeOwned>(body: &str) -> UseCaseResult<T> {
    serde_json::from_str(body).map_err(|e| UseCaseError::decode(e.to_string()))
}
