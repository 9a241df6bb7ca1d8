use crate::feed::models::RoundData;
use crate::utils::config::Config;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors from the outbound feed call. All of them abort the current
/// ingest tick and are retried on the next one.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("feed returned HTTP {0}")]
    UpstreamStatus(reqwest::StatusCode),
}

/// Source of the latest round. The HTTP client is the production
/// implementation; tests substitute a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_latest(&self) -> Result<RoundData, FeedError>;
}

/// Polls the upstream Sunwin result API over HTTP.
pub struct HttpFeedClient {
    client: reqwest::Client,
    url: String,
}

impl HttpFeedClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .pool_max_idle_per_host(2)
            .build()?;

        Ok(Self {
            client,
            url: config.feed_url.clone(),
        })
    }
}

#[async_trait]
impl FeedSource for HttpFeedClient {
    async fn fetch_latest(&self) -> Result<RoundData, FeedError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(FeedError::UpstreamStatus(response.status()));
        }

        let round: RoundData = response.json().await?;
        Ok(round)
    }
}
