//! Typed HTTP client for the upstream API
//!
//! GET /api/posts - List all posts
//! GET /api/posts/{id}/comments - List comments for a post
//! GET /api/authors/{id} - Get an author by id
//!
//! Every call is a single round trip with no retries; any failure is fatal
//! to the caller's run.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{Author, Comment, Post};

/// Client for the posts/comments/authors API
///
/// Wraps a shared `reqwest::Client`; its connection pool is the only shared
/// resource in the process and is safe for any number of concurrent requests
/// without extra locking.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client from configuration
    pub fn new(config: &Config) -> std::result::Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(
                config.api.connect_timeout_secs,
            ))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// List all posts
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        self.get_json("/api/posts").await
    }

    /// List the comments of a post, in server order
    pub async fn list_comments(&self, post_id: i64) -> Result<Vec<Comment>> {
        self.get_json(&format!("/api/posts/{}/comments", post_id))
            .await
    }

    /// Get a single author by id
    pub async fn get_author(&self, author_id: i64) -> Result<Author> {
        self.get_json(&format!("/api/authors/{}", author_id)).await
    }

    /// Issue one GET request and decode the body into the target type
    ///
    /// Fails with `Transport` when no response is obtained, `HttpStatus` on a
    /// non-success status, `EmptyBody` on a success response without a body,
    /// and `Decode` when the body is not JSON of the expected shape.
    async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        debug!(url = %url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus { url, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        if body.is_empty() {
            return Err(ApiError::EmptyBody { url });
        }

        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let config = Config {
            api: ApiConfig {
                base_url: "http://localhost:9999/".to_string(),
                connect_timeout_secs: 10,
            },
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
