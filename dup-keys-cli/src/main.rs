//! Bus Log Duplicate Keys
//!
//! Prints the registers with more than one stored entry, i.e. those observed
//! to change at least once since their first reading.

use anyhow::Result;
use buslog_ingestion::change_store::{ChangeStore, PgChangeStore};
use buslog_ingestion::config::{connect_to_log_db, load_db_config};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(name = "buslog-dup-keys")]
#[clap(about = "Lists registers that have changed value at least once", version)]
struct Cli {
    /// Database config file
    #[clap(long, default_value = "db_config.json")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();
    let config = load_db_config(&args.config)?;
    let pool = connect_to_log_db(&config).await?;
    let store = PgChangeStore::new(pool);
    println!("Keys with more than one entry:");
    for key in store.duplicate_keys().await? {
        println!("{key}");
    }
    Ok(())
}
