//! Fetch Errors

use thiserror::Error;

/// Why a dashboard request produced no data
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status
    #[error("HTTP status {status}")]
    Status { status: u16 },

    /// The body did not match the expected shape
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
