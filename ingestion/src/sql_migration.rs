use crate::sql_log_db::create_tables;
use anyhow::Result;
use log::info;
use sqlx::Row;

pub const LATEST_SCHEMA_VERSION: i32 = 1;

pub async fn read_schema_version(tr: &mut sqlx::Transaction<'_, sqlx::Postgres>) -> i32 {
    match sqlx::query(
        "SELECT version
         FROM migration;",
    )
    .fetch_one(&mut **tr)
    .await
    {
        Ok(row) => row.get("version"),
        Err(e) => {
            info!("Error reading schema version, assuming version 0: {}", e);
            0
        }
    }
}

/// Creates the schema when it does not exist yet. Idempotent; safe to run on
/// every collector start.
pub async fn execute_migration(pool: sqlx::Pool<sqlx::Postgres>) -> Result<()> {
    let mut current_version = read_schema_version(&mut pool.begin().await?).await;
    if 0 == current_version {
        info!("creating v1 schema");
        let mut tr = pool.begin().await?;
        create_tables(&mut tr).await?;
        current_version = read_schema_version(&mut tr).await;
        tr.commit().await?;
    }
    assert_eq!(current_version, LATEST_SCHEMA_VERSION);
    Ok(())
}
