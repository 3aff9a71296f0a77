//! Feed Aggregator Library
//!
//! Read-only client that assembles a denormalized feed from a paginated-resource
//! JSON API: posts, per-post comments, and the authors both reference. The
//! pipeline fans out independent fetches concurrently, deduplicates author
//! identifiers, and joins everything in memory.
//!
//! # Modules
//!
//! - `client`: Typed HTTP client for the posts/comments/authors endpoints
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `models`: Wire entities and joined composites
//! - `services`: Aggregation pipeline (fan-out joins, author resolution)

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use client::ApiClient;
pub use config::Config;
pub use error::{ApiError, Result};
pub use services::aggregation::FeedService;
