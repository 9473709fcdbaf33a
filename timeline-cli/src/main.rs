//! Bus Log Timeline
//!
//! Rebuilds and prints a key × minute grid of recent register changes on a
//! fixed cadence, with a per-second countdown between rebuilds.

use anyhow::Result;
use buslog_analytics::query_changes::build_window_timeline;
use buslog_analytics::render::render_timeline;
use buslog_ingestion::change_store::{ChangeStore, PgChangeStore};
use buslog_ingestion::config::{connect_to_log_db, load_db_config};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(name = "buslog-timeline")]
#[clap(about = "Console timeline of recent register changes", version)]
struct Cli {
    /// How far back to look for changes, in minutes
    #[clap(value_parser = clap::value_parser!(i64).range(1..))]
    time_window_minutes: i64,

    /// Suppress the built-in set of noisy registers
    #[clap(long)]
    hide_keys: bool,

    /// Seconds between rebuilds
    #[clap(long, default_value_t = 60)]
    refresh_seconds: u64,

    /// Database config file
    #[clap(long, default_value = "db_config.json")]
    config: PathBuf,
}

/// One full rebuild; the grid is only printed once fully built.
async fn run_tick(store: &dyn ChangeStore, window_minutes: i64, hide_keys: bool) -> Result<()> {
    match build_window_timeline(store, window_minutes, hide_keys).await? {
        Some(timeline) => {
            // clear the console before redrawing
            print!("\x1bc");
            std::io::stdout().flush()?;
            println!("\nRegister changes:");
            println!("{}", render_timeline(&timeline));
        }
        None => println!("\nNo changes in the requested window."),
    }
    Ok(())
}

async fn countdown(seconds: u64) -> Result<()> {
    for remaining in (1..=seconds).rev() {
        print!("\rRefreshing in {remaining} seconds... ");
        std::io::stdout().flush()?;
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();
    let config = load_db_config(&args.config)?;
    let pool = connect_to_log_db(&config).await?;
    let store = PgChangeStore::new(pool);
    loop {
        run_tick(&store, args.time_window_minutes, args.hide_keys).await?;
        countdown(args.refresh_seconds).await?;
    }
}
