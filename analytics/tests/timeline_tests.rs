use buslog_analytics::query_changes::{build_window_timeline, window_threshold};
use buslog_analytics::timeline::{build_timeline, minute_bucket};
use buslog_ingestion::change_store::{ChangeStore, LogEntry};
use buslog_ingestion::test_utils::MemoryChangeStore;
use chrono::{DateTime, TimeDelta, Utc};

fn entry(key: &str, value: &str, timestamp: DateTime<Utc>) -> LogEntry {
    LogEntry {
        key: key.to_owned(),
        value: value.to_owned(),
        timestamp,
    }
}

fn at(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse().unwrap()
}

#[test]
fn test_minute_bucket_drops_seconds() {
    assert_eq!(
        minute_bucket(at("2026-01-07T15:14:42.123Z")),
        at("2026-01-07T15:14:00Z")
    );
}

#[test]
fn test_window_threshold() {
    let now = at("2026-01-07T15:14:00Z");
    assert_eq!(window_threshold(now, 60), at("2026-01-07T14:14:00Z"));
}

#[test]
fn test_last_change_in_a_minute_wins() {
    let entries = vec![
        entry("4248", "5", at("2026-01-07T15:14:10Z")),
        entry("4248", "10", at("2026-01-07T15:14:50Z")),
    ];
    let timeline = build_timeline(&entries, false).unwrap();
    assert_eq!(
        timeline.value("4248", at("2026-01-07T15:14:00Z")),
        Some("10")
    );
    assert_eq!(timeline.buckets().count(), 1);
}

#[test]
fn test_rows_and_columns_are_sorted() {
    let entries = vec![
        entry("4248", "5", at("2026-01-07T15:21:00Z")),
        entry("4000", "1", at("2026-01-07T15:14:00Z")),
        entry("411e", "0", at("2026-01-07T15:19:00Z")),
    ];
    let timeline = build_timeline(&entries, false).unwrap();
    let keys: Vec<&str> = timeline.keys().collect();
    assert_eq!(keys, vec!["4000", "411e", "4248"]);
    let buckets: Vec<DateTime<Utc>> = timeline.buckets().collect();
    assert_eq!(
        buckets,
        vec![
            at("2026-01-07T15:14:00Z"),
            at("2026-01-07T15:19:00Z"),
            at("2026-01-07T15:21:00Z"),
        ]
    );
}

#[test]
fn test_hidden_keys_are_suppressed_only_on_request() {
    let entries = vec![
        entry("8001", "32", at("2026-01-07T15:14:00Z")),
        entry("4000", "1", at("2026-01-07T15:14:00Z")),
    ];
    let visible = build_timeline(&entries, false).unwrap();
    assert_eq!(visible.keys().count(), 2);
    let suppressed = build_timeline(&entries, true).unwrap();
    let keys: Vec<&str> = suppressed.keys().collect();
    assert_eq!(keys, vec!["4000"]);
}

#[test]
fn test_empty_window_is_not_an_error() {
    assert_eq!(build_timeline(&[], false), None);
}

#[tokio::test]
async fn test_window_filtering() {
    let store = MemoryChangeStore::new();
    let now = Utc::now();
    store
        .append("old", "1", now - TimeDelta::minutes(120))
        .await
        .unwrap();
    store
        .append("recent", "2", now - TimeDelta::minutes(30))
        .await
        .unwrap();
    store
        .append("fresh", "3", now - TimeDelta::minutes(5))
        .await
        .unwrap();
    let timeline = build_window_timeline(&store, 60, false)
        .await
        .unwrap()
        .unwrap();
    let keys: Vec<&str> = timeline.keys().collect();
    assert_eq!(keys, vec!["fresh", "recent"]);
}

#[tokio::test]
async fn test_hidden_entries_still_count_as_duplicates() {
    let store = MemoryChangeStore::new();
    let now = Utc::now();
    store.append("8001", "32", now).await.unwrap();
    store.append("8001", "33", now).await.unwrap();
    let timeline = build_window_timeline(&store, 60, true).await.unwrap();
    assert!(timeline.unwrap().is_empty());
    assert_eq!(store.duplicate_keys().await.unwrap(), vec!["8001"]);
}
