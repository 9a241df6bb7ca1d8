pub mod client;
pub mod models;

pub use client::{FeedError, FeedSource, HttpFeedClient};
pub use models::RoundData;

#[cfg(test)]
pub use client::MockFeedSource;
