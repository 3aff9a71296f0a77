//! Error types for the feed aggregator
//!
//! Every error is fatal to the run: nothing is retried and no partial
//! aggregate is ever emitted. The variant only affects the diagnostic.

use thiserror::Error;

/// Result type alias for aggregator operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors raised by a single API round trip
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was obtained (connection refused, timeout, DNS failure)
    #[error("transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A response was obtained but its status is outside the success range
    #[error("unexpected status {status} from {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Success status with a zero-length body
    #[error("empty response body from {url}")]
    EmptyBody { url: String },

    /// Body is not valid JSON or does not match the expected shape
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
