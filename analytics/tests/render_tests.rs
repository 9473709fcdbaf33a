use buslog_analytics::render::{format_cell, render_timeline, COLUMN_WIDTH};
use buslog_analytics::timeline::build_timeline;
use buslog_ingestion::change_store::LogEntry;
use chrono::{DateTime, Utc};

fn entry(key: &str, value: &str, timestamp: &str) -> LogEntry {
    LogEntry {
        key: key.to_owned(),
        value: value.to_owned(),
        timestamp: timestamp.parse::<DateTime<Utc>>().unwrap(),
    }
}

#[test]
fn test_short_value_is_right_justified() {
    assert_eq!(format_cell("42"), "        42");
    assert_eq!(format_cell("42").len(), COLUMN_WIDTH);
}

#[test]
fn test_long_value_is_truncated_with_ellipsis() {
    let cell = format_cell("12345678901234");
    assert_eq!(cell, "1234567...");
    assert_eq!(cell.len(), COLUMN_WIDTH);
}

#[test]
fn test_exact_width_value_is_untouched() {
    assert_eq!(format_cell("1234567890"), "1234567890");
}

#[test]
fn test_grid_layout() {
    let entries = vec![
        entry("4000", "1", "2026-01-07T15:14:20Z"),
        entry("4248", "65526", "2026-01-07T15:19:05Z"),
    ];
    let timeline = build_timeline(&entries, false).unwrap();
    let grid = render_timeline(&timeline);
    let lines: Vec<&str> = grid.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "           |      15:14 |      15:19");
    assert_eq!(lines[1], "-".repeat(lines[0].len()));
    assert_eq!(lines[2], "      4000 |          1 |           ");
    assert_eq!(lines[3], "      4248 |            |      65526");
}

#[test]
fn test_header_labels_match_buckets() {
    let entries = vec![entry("4000", "1", "2026-01-07T09:05:59Z")];
    let timeline = build_timeline(&entries, false).unwrap();
    let grid = render_timeline(&timeline);
    assert!(grid.lines().next().unwrap().contains("09:05"));
}
