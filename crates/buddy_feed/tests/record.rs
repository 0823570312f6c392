use std::fs;
use std::sync::Once;

use buddy_feed::{RecordStore, UpdateRecord, RECORD_FILENAME};
use tempfile::TempDir;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(buddy_logging::initialize_for_tests);
}

fn record(date: &str) -> UpdateRecord {
    UpdateRecord {
        last_update_date: date.to_string(),
        last_update_first_page: Some("613".to_string()),
        last_update_first_page_title: Some("The Long Night".to_string()),
        last_update_first_page_url: Some("https://www.moonlark-comic.com/story/613".to_string()),
        last_update_page_count: Some(3),
    }
}

#[test]
fn missing_file_is_a_first_run() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let store = RecordStore::new(temp.path().join(RECORD_FILENAME));
    assert_eq!(store.load(), None);
}

#[test]
fn store_then_load_round_trips_and_creates_the_directory() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("deskmates").join(RECORD_FILENAME);
    assert!(!path.parent().unwrap().exists());

    let store = RecordStore::new(path);
    let written = record("2026-08-01T12:00:00+00:00");
    store.store(&written).unwrap();
    assert_eq!(store.load(), Some(written));
}

#[test]
fn malformed_record_is_treated_as_absent() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(RECORD_FILENAME);
    fs::write(&path, "{ not json").unwrap();

    let store = RecordStore::new(path);
    assert_eq!(store.load(), None);
}

#[test]
fn store_replaces_the_record_and_leaves_no_temp_files() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let store = RecordStore::new(temp.path().join(RECORD_FILENAME));

    store.store(&record("A")).unwrap();
    store.store(&record("B")).unwrap();
    assert_eq!(store.load().unwrap().last_update_date, "B");

    let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "stray files next to the record");
}

#[test]
fn page_fields_are_omitted_when_unknown() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let store = RecordStore::new(temp.path().join(RECORD_FILENAME));

    let bare = UpdateRecord {
        last_update_date: "A".to_string(),
        last_update_first_page: None,
        last_update_first_page_title: None,
        last_update_first_page_url: None,
        last_update_page_count: None,
    };
    store.store(&bare).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(!raw.contains("last_update_first_page"));
    assert!(!raw.contains("last_update_page_count"));
    assert_eq!(store.load(), Some(bare));
}
