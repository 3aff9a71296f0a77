//! Business logic layer
//!
//! - `aggregation`: the fan-out/fan-in pipeline that assembles the feed

pub mod aggregation;

pub use aggregation::FeedService;
