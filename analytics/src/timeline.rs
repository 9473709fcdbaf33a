use crate::hidden_keys::is_hidden;
use buslog_ingestion::change_store::LogEntry;
use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use std::collections::{BTreeMap, BTreeSet};

/// A timestamp truncated to whole minutes; the column key of the grid.
pub type TimeBucket = DateTime<Utc>;

pub fn minute_bucket(timestamp: DateTime<Utc>) -> TimeBucket {
    timestamp
        .duration_trunc(TimeDelta::minutes(1))
        .unwrap_or(timestamp)
}

/// Ephemeral key × minute grid of last-seen values, rebuilt on every query.
/// Rows iterate in key order, columns in chronological order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Timeline {
    cells: BTreeMap<String, BTreeMap<TimeBucket, String>>,
    buckets: BTreeSet<TimeBucket>,
}

impl Timeline {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn buckets(&self) -> impl Iterator<Item = TimeBucket> + '_ {
        self.buckets.iter().copied()
    }

    pub fn value(&self, key: &str, bucket: TimeBucket) -> Option<&str> {
        self.cells
            .get(key)
            .and_then(|row| row.get(&bucket))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Builds the grid from entries already ordered ascending by timestamp, so a
/// later change within the same minute overwrites the earlier one. Returns
/// `None` when the window held no entries at all, a valid outcome distinct
/// from failure.
pub fn build_timeline(entries: &[LogEntry], hide_keys: bool) -> Option<Timeline> {
    if entries.is_empty() {
        return None;
    }
    let mut timeline = Timeline::default();
    for entry in entries {
        if hide_keys && is_hidden(&entry.key) {
            continue;
        }
        let bucket = minute_bucket(entry.timestamp);
        timeline.buckets.insert(bucket);
        timeline
            .cells
            .entry(entry.key.clone())
            .or_default()
            .insert(bucket, entry.value.clone());
    }
    Some(timeline)
}
