//! Configuration management for the feed aggregator
//!
//! Loads configuration from environment variables with sensible defaults for
//! local development.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Upstream API configuration
    pub api: ApiConfig,
}

/// Upstream API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the posts/comments/authors API
    pub base_url: String,
    /// Connect timeout applied to every request
    pub connect_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            api: ApiConfig {
                base_url: std::env::var("FEED_API_BASE_URL")
                    .unwrap_or_else(|_| "http://127.0.0.1:9999".to_string()),
                connect_timeout_secs: match std::env::var("FEED_API_CONNECT_TIMEOUT_SECS") {
                    Ok(val) => val.parse().map_err(|e| {
                        format!("Failed to parse FEED_API_CONNECT_TIMEOUT_SECS='{}': {}", val, e)
                    })?,
                    Err(_) => 10,
                },
            },
        })
    }
}
