//! Error types for the outlook pipeline

use thiserror::Error;

/// Main error type for the outlook pipeline
///
/// Fetch failures (transport, status, malformed body) are typed here but
/// never escape the adapter boundary: `sources::monthly_averages_or_zero`
/// degrades them to an all-zero series after logging. Chart errors do
/// propagate, since there is no degraded rendering target.
#[derive(Error, Debug)]
pub enum OutlookError {
    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("Unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Chart error: {0}")]
    Chart(String),
}

/// Result type alias for outlook pipeline operations
pub type Result<T> = std::result::Result<T, OutlookError>;
