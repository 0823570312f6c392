//! Pure record diffing for the poll loop.

use crate::types::{FeedSnapshot, UpdateRecord};

/// What one successful poll concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// No record on disk yet; persist without signaling.
    FirstRun(UpdateRecord),
    /// Same feed-level timestamp as last time.
    Unchanged(UpdateRecord),
    /// The feed moved on; persist and signal.
    Updated(UpdateRecord),
}

impl PollOutcome {
    /// The record to persist, regardless of outcome.
    pub fn into_record(self) -> UpdateRecord {
        match self {
            PollOutcome::FirstRun(record)
            | PollOutcome::Unchanged(record)
            | PollOutcome::Updated(record) => record,
        }
    }
}

/// Compare a fetched feed against the previously persisted record.
pub fn evaluate(previous: Option<&UpdateRecord>, feed: &FeedSnapshot) -> PollOutcome {
    let record = record_from_feed(feed);
    match previous {
        None => PollOutcome::FirstRun(record),
        Some(prev) if prev.last_update_date == record.last_update_date => {
            PollOutcome::Unchanged(record)
        }
        Some(_) => PollOutcome::Updated(record),
    }
}

/// Build the record for a fetched feed. Scanning newest-first, the first
/// entry whose own timestamp differs from the feed-level one bounds the
/// newest update: the entry just before it is that update's first page and
/// the boundary index is its page count. A boundary at index zero, or none
/// at all, leaves the page fields empty.
pub fn record_from_feed(feed: &FeedSnapshot) -> UpdateRecord {
    let boundary = feed
        .entries
        .iter()
        .position(|entry| entry.updated.as_deref() != Some(feed.updated.as_str()));

    let first_page = match boundary {
        Some(index) if index > 0 => Some((&feed.entries[index - 1], index)),
        _ => None,
    };

    UpdateRecord {
        last_update_date: feed.updated.clone(),
        last_update_first_page: first_page.map(|(entry, _)| entry.title.clone()),
        last_update_first_page_title: first_page.and_then(|(entry, _)| entry.summary.clone()),
        last_update_first_page_url: first_page.and_then(|(entry, _)| entry.link.clone()),
        last_update_page_count: first_page.map(|(_, count)| count),
    }
}
