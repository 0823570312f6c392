use std::fmt;

use serde::{Deserialize, Serialize};

/// The locally persisted memory of the last seen update. One flat JSON
/// object, rewritten wholesale on every successful poll. The page fields
/// are only present when the boundary scan found the newest update's
/// first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRecord {
    pub last_update_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_first_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_first_page_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_first_page_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_page_count: Option<usize>,
}

/// A fetched feed reduced to what the poller needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSnapshot {
    /// Feed-level updated timestamp, RFC3339.
    pub updated: String,
    /// Entries in feed order, newest first.
    pub entries: Vec<FeedEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedEntry {
    pub title: String,
    pub summary: Option<String>,
    pub link: Option<String>,
    pub updated: Option<String>,
}

/// Event sent from the poll worker to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// A new update was detected; carries the freshly persisted record.
    UpdateFound(UpdateRecord),
}

/// Failure while fetching or interpreting the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedError {
    pub kind: FeedFailure,
    pub message: String,
}

impl FeedError {
    pub(crate) fn new(kind: FeedFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedFailure {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Parse,
    /// The feed carries no feed-level updated timestamp.
    MissingUpdated,
}

impl fmt::Display for FeedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedFailure::InvalidUrl => write!(f, "invalid url"),
            FeedFailure::HttpStatus(code) => write!(f, "http status {code}"),
            FeedFailure::Timeout => write!(f, "timeout"),
            FeedFailure::Network => write!(f, "network error"),
            FeedFailure::Parse => write!(f, "feed parse error"),
            FeedFailure::MissingUpdated => write!(f, "feed has no updated timestamp"),
        }
    }
}
