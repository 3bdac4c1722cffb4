//! Assistant API error types.

use thiserror::Error;

/// Errors from the assistant API.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {error_type} - {message}")]
    Api { error_type: String, message: String },

    /// Rate limited; retry after the given number of seconds.
    #[error("Rate limited, retry after {0}s")]
    RateLimited(u64),

    /// Invalid or missing API key.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Failed to parse a response body.
    #[error("Parse error: {0}")]
    Parse(String),
}
