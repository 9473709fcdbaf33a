use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;

/// One persisted observation of a register changing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub key: String,
    pub value: String,
    pub timestamp: DateTime<Utc>,
}

/// Append-only change log. Entries are never updated or deleted; for any key
/// the stored sequence is strictly non-repeating in value.
#[async_trait]
pub trait ChangeStore: Send + Sync {
    /// Most recent stored value for a key, if any.
    async fn last_value(&self, key: &str) -> Result<Option<String>>;

    async fn append(&self, key: &str, value: &str, timestamp: DateTime<Utc>) -> Result<()>;

    /// All entries with `timestamp >= threshold`, ascending by timestamp.
    async fn entries_since(&self, threshold: DateTime<Utc>) -> Result<Vec<LogEntry>>;

    /// Keys with more than one stored entry, sorted ascending.
    async fn duplicate_keys(&self) -> Result<Vec<String>>;
}

pub struct PgChangeStore {
    pool: sqlx::PgPool,
}

impl PgChangeStore {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChangeStore for PgChangeStore {
    async fn last_value(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query(
            "SELECT value
             FROM logs
             WHERE key = $1
             ORDER BY timestamp DESC
             LIMIT 1;",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| "select last value from logs")?;
        match row {
            Some(row) => Ok(Some(row.try_get("value")?)),
            None => Ok(None),
        }
    }

    async fn append(&self, key: &str, value: &str, timestamp: DateTime<Utc>) -> Result<()> {
        sqlx::query(
            "INSERT INTO logs (key, value, timestamp)
             VALUES ($1, $2, $3);",
        )
        .bind(key)
        .bind(value)
        .bind(timestamp)
        .execute(&self.pool)
        .await
        .with_context(|| "inserting into logs")?;
        Ok(())
    }

    async fn entries_since(&self, threshold: DateTime<Utc>) -> Result<Vec<LogEntry>> {
        let rows = sqlx::query(
            "SELECT key, value, timestamp
             FROM logs
             WHERE timestamp >= $1
             ORDER BY timestamp ASC;",
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await
        .with_context(|| "select entries from logs")?;
        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            entries.push(LogEntry {
                key: row.try_get("key")?,
                value: row.try_get("value")?,
                timestamp: row.try_get("timestamp")?,
            });
        }
        Ok(entries)
    }

    async fn duplicate_keys(&self) -> Result<Vec<String>> {
        let rows = sqlx::query(
            "SELECT key
             FROM logs
             GROUP BY key
             HAVING COUNT(*) > 1
             ORDER BY key ASC;",
        )
        .fetch_all(&self.pool)
        .await
        .with_context(|| "select duplicated keys from logs")?;
        let mut keys = Vec::with_capacity(rows.len());
        for row in rows {
            keys.push(row.try_get("key")?);
        }
        Ok(keys)
    }
}
