use buddy_feed::{evaluate, record_from_feed, FeedEntry, FeedSnapshot, PollOutcome, UpdateRecord};
use pretty_assertions::assert_eq;

fn entry(title: &str, updated: &str) -> FeedEntry {
    FeedEntry {
        title: title.to_string(),
        summary: Some(format!("{title} summary")),
        link: Some(format!("https://www.moonlark-comic.com/story/{title}")),
        updated: Some(updated.to_string()),
    }
}

/// Three newest pages share the feed timestamp; the older two do not.
fn feed() -> FeedSnapshot {
    FeedSnapshot {
        updated: "B".to_string(),
        entries: vec![
            entry("615", "B"),
            entry("614", "B"),
            entry("613", "B"),
            entry("612", "A"),
            entry("611", "A"),
        ],
    }
}

fn stored(date: &str) -> UpdateRecord {
    UpdateRecord {
        last_update_date: date.to_string(),
        last_update_first_page: Some("610".to_string()),
        last_update_first_page_title: Some("610 summary".to_string()),
        last_update_first_page_url: Some("https://www.moonlark-comic.com/story/610".to_string()),
        last_update_page_count: Some(2),
    }
}

#[test]
fn record_points_at_the_newest_updates_first_page() {
    let record = record_from_feed(&feed());
    assert_eq!(record.last_update_date, "B");
    assert_eq!(record.last_update_first_page.as_deref(), Some("613"));
    assert_eq!(
        record.last_update_first_page_title.as_deref(),
        Some("613 summary")
    );
    assert_eq!(
        record.last_update_first_page_url.as_deref(),
        Some("https://www.moonlark-comic.com/story/613")
    );
    assert_eq!(record.last_update_page_count, Some(3));
}

#[test]
fn record_without_a_boundary_has_no_page_fields() {
    let all_current = FeedSnapshot {
        updated: "B".to_string(),
        entries: vec![entry("615", "B"), entry("614", "B")],
    };
    let record = record_from_feed(&all_current);
    assert_eq!(record.last_update_date, "B");
    assert_eq!(record.last_update_first_page, None);
    assert_eq!(record.last_update_first_page_title, None);
    assert_eq!(record.last_update_first_page_url, None);
    assert_eq!(record.last_update_page_count, None);
}

#[test]
fn record_with_a_stale_newest_entry_has_no_page_fields() {
    // The feed-level timestamp matches no entry at all; the boundary sits
    // at index zero and there is no preceding entry to point at.
    let stale = FeedSnapshot {
        updated: "B".to_string(),
        entries: vec![entry("615", "A"), entry("614", "A")],
    };
    let record = record_from_feed(&stale);
    assert_eq!(record.last_update_date, "B");
    assert_eq!(record.last_update_first_page, None);
    assert_eq!(record.last_update_page_count, None);
}

#[test]
fn first_poll_is_a_first_run() {
    match evaluate(None, &feed()) {
        PollOutcome::FirstRun(record) => assert_eq!(record.last_update_date, "B"),
        other => panic!("expected a first run, got {other:?}"),
    }
}

#[test]
fn matching_dates_are_unchanged() {
    let previous = stored("B");
    match evaluate(Some(&previous), &feed()) {
        PollOutcome::Unchanged(record) => assert_eq!(record.last_update_date, "B"),
        other => panic!("expected unchanged, got {other:?}"),
    }
}

#[test]
fn differing_dates_are_an_update() {
    let previous = stored("A");
    match evaluate(Some(&previous), &feed()) {
        PollOutcome::Updated(record) => {
            assert_eq!(record.last_update_date, "B");
            assert_eq!(record.last_update_first_page.as_deref(), Some("613"));
            assert_eq!(record.last_update_page_count, Some(3));
        }
        other => panic!("expected an update, got {other:?}"),
    }
}
