use anyhow::{Context, Result};
use sqlx::Executor;

async fn create_migration_table(tr: &mut sqlx::Transaction<'_, sqlx::Postgres>) -> Result<()> {
    sqlx::query("CREATE table migration(version integer);")
        .execute(&mut **tr)
        .await
        .with_context(|| String::from("Creating table migration"))?;
    sqlx::query("INSERT INTO migration VALUES(1);")
        .execute(&mut **tr)
        .await
        .with_context(|| String::from("Recording the initial schema version"))?;
    Ok(())
}

async fn create_logs_table(tr: &mut sqlx::Transaction<'_, sqlx::Postgres>) -> Result<()> {
    let sql = "
         CREATE TABLE logs(
                  id BIGSERIAL PRIMARY KEY,
                  key TEXT NOT NULL,
                  value TEXT NOT NULL,
                  timestamp TIMESTAMPTZ NOT NULL
                  );
         CREATE INDEX logs_key on logs(key);
         CREATE INDEX logs_timestamp on logs(timestamp);";
    tr.execute(sql)
        .await
        .with_context(|| String::from("Creating table logs and its indices"))?;
    Ok(())
}

/// Creates the tables for the change log database.
pub async fn create_tables(tr: &mut sqlx::Transaction<'_, sqlx::Postgres>) -> Result<()> {
    create_logs_table(tr).await?;
    create_migration_table(tr).await?;
    Ok(())
}
