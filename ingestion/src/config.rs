use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Connection parameters for the log database, read from a json file.
#[derive(Debug, Clone, Deserialize)]
pub struct DbConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

fn default_port() -> u16 {
    5432
}

impl DbConfig {
    pub fn connection_string(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database
        )
    }
}

pub fn load_db_config(path: &Path) -> Result<DbConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading database config {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parsing database config {}", path.display()))
}

pub async fn connect_to_log_db(config: &DbConfig) -> Result<sqlx::PgPool> {
    sqlx::postgres::PgPoolOptions::new()
        .connect(&config.connection_string())
        .await
        .with_context(|| String::from("Connecting to log database"))
}
