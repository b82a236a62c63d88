//! HTTP fetch helper
//!
//! One GET per call, no retries and no backoff. Any transport failure,
//! non-200 status or undecodable body surfaces as a typed error for the
//! adapter boundary to degrade.

use crate::error::{OutlookError, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Build an HTTP client with the pipeline's request timeout
pub fn client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| OutlookError::Transport(format!("Failed to create HTTP client: {}", e)))
}

/// Issue a single GET and decode the JSON body
pub async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| OutlookError::Transport(e.to_string()))?;

    if response.status() != StatusCode::OK {
        return Err(OutlookError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| OutlookError::Transport(e.to_string()))?;

    serde_json::from_str(&body).map_err(|e| OutlookError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(client().is_ok());
    }
}
