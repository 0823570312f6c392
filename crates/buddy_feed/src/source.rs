use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::types::{FeedEntry, FeedError, FeedFailure, FeedSnapshot};

/// Network knobs for the production feed source.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Where the poller gets its feed; swapped for a scripted source in tests.
#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FeedSnapshot, FeedError>;
}

/// Production source: HTTP GET plus feed parsing.
#[derive(Debug, Clone, Default)]
pub struct HttpFeedSource {
    settings: FetchSettings,
}

impl HttpFeedSource {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FeedError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FeedError::new(FeedFailure::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self, url: &str) -> Result<FeedSnapshot, FeedError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FeedError::new(FeedFailure::InvalidUrl, err.to_string()))?;
        let client = self.build_client()?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::new(
                FeedFailure::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        parse_feed(bytes.as_ref())
    }
}

/// Reduce a raw feed document to the poller's snapshot. Works for RSS and
/// Atom alike; per-entry timestamps fall back from updated to published.
fn parse_feed(bytes: &[u8]) -> Result<FeedSnapshot, FeedError> {
    let feed = feed_rs::parser::parse(bytes)
        .map_err(|err| FeedError::new(FeedFailure::Parse, err.to_string()))?;

    let updated = feed
        .updated
        .or(feed.published)
        .map(rfc3339)
        .ok_or_else(|| {
            FeedError::new(FeedFailure::MissingUpdated, "missing feed-level timestamp")
        })?;

    let entries = feed
        .entries
        .into_iter()
        .map(|entry| FeedEntry {
            title: entry.title.map(|title| title.content).unwrap_or_default(),
            summary: entry.summary.map(|summary| summary.content),
            link: entry.links.first().map(|link| link.href.clone()),
            updated: entry.updated.or(entry.published).map(rfc3339),
        })
        .collect();

    Ok(FeedSnapshot { updated, entries })
}

fn rfc3339(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339()
}

fn map_reqwest_error(err: reqwest::Error) -> FeedError {
    if err.is_timeout() {
        return FeedError::new(FeedFailure::Timeout, err.to_string());
    }
    FeedError::new(FeedFailure::Network, err.to_string())
}
