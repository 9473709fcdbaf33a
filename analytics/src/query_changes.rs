use crate::timeline::{build_timeline, Timeline};
use anyhow::{Context, Result};
use buslog_ingestion::change_store::ChangeStore;
use chrono::{DateTime, TimeDelta, Utc};

pub fn window_threshold(now: DateTime<Utc>, window_minutes: i64) -> DateTime<Utc> {
    now - TimeDelta::minutes(window_minutes)
}

/// One full rebuild: fetch every change in the window and bucket it into a
/// fresh grid. `Ok(None)` means the window held no changes.
pub async fn build_window_timeline(
    store: &dyn ChangeStore,
    window_minutes: i64,
    hide_keys: bool,
) -> Result<Option<Timeline>> {
    let threshold = window_threshold(Utc::now(), window_minutes);
    let entries = store
        .entries_since(threshold)
        .await
        .with_context(|| "fetching changed entries")?;
    Ok(build_timeline(&entries, hide_keys))
}
