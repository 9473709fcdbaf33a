//! In-memory change store for tests.

use crate::change_store::{ChangeStore, LogEntry};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Keeps entries in insertion order, which the collector guarantees is also
/// chronological order.
#[derive(Default)]
pub struct MemoryChangeStore {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryChangeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChangeStore for MemoryChangeStore {
    async fn last_value(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .iter()
            .rev()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.clone()))
    }

    async fn append(&self, key: &str, value: &str, timestamp: DateTime<Utc>) -> Result<()> {
        self.entries.lock().unwrap().push(LogEntry {
            key: key.to_owned(),
            value: value.to_owned(),
            timestamp,
        });
        Ok(())
    }

    async fn entries_since(&self, threshold: DateTime<Utc>) -> Result<Vec<LogEntry>> {
        let entries = self.entries.lock().unwrap();
        let mut matching: Vec<LogEntry> = entries
            .iter()
            .filter(|entry| entry.timestamp >= threshold)
            .cloned()
            .collect();
        matching.sort_by_key(|entry| entry.timestamp);
        Ok(matching)
    }

    async fn duplicate_keys(&self) -> Result<Vec<String>> {
        let entries = self.entries.lock().unwrap();
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for entry in entries.iter() {
            *counts.entry(&entry.key).or_default() += 1;
        }
        Ok(counts
            .into_iter()
            .filter(|(_key, count)| *count > 1)
            .map(|(key, _count)| key.to_owned())
            .collect())
    }
}
