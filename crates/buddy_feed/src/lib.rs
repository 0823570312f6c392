//! Buddy feed: the background update poller and its persisted record.
mod diff;
mod poller;
mod record;
mod source;
mod types;

pub use diff::{evaluate, record_from_feed, PollOutcome};
pub use poller::{PollConfig, PollWorker, POLL_INTERVAL};
pub use record::{RecordError, RecordStore, RECORD_FILENAME};
pub use source::{FeedSource, FetchSettings, HttpFeedSource};
pub use types::{FeedEntry, FeedError, FeedEvent, FeedFailure, FeedSnapshot, UpdateRecord};
