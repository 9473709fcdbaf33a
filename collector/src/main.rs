//! Bus Log Collector
//!
//! Launches the bus-monitor command, watches its output for register
//! records and appends a log entry whenever a register changes value.

use anyhow::Result;
use buslog_ingestion::change_store::PgChangeStore;
use buslog_ingestion::collector_service::{run_collector, DEFAULT_TELEMETRY_COMMAND};
use buslog_ingestion::config::{connect_to_log_db, load_db_config};
use buslog_ingestion::sql_migration::execute_migration;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "buslog-collector")]
#[clap(about = "Records register changes from the bus-monitor stream", version)]
struct Cli {
    /// Database config file
    #[clap(long, default_value = "db_config.json")]
    config: PathBuf,

    /// Telemetry command to run and watch
    #[clap(long, default_value = DEFAULT_TELEMETRY_COMMAND)]
    command: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();
    let config = load_db_config(&args.config)?;
    let pool = connect_to_log_db(&config).await?;
    execute_migration(pool.clone()).await?;
    let store = PgChangeStore::new(pool);
    run_collector(&store, &args.command).await
}
