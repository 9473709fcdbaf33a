use crate::change_store::ChangeStore;
use crate::line_parser::{classify_line, LineClass};
use anyhow::{Context, Result};
use chrono::Utc;
use log::{info, warn};
use std::process::Stdio;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// Bus-monitor invocation used when none is given on the command line.
pub const DEFAULT_TELEMETRY_COMMAND: &str = "uvx esphome logs esphome_samsung_hvac_bus.yaml";

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("telemetry command exited with {status}: {stderr}")]
    UpstreamProcessFailure {
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Appends the reading only when it differs from the key's last stored value.
/// Returns whether an entry was written.
pub async fn record_reading(store: &dyn ChangeStore, key: &str, value: &str) -> Result<bool> {
    let previous_value = store.last_value(key).await?;
    if previous_value.as_deref() == Some(value) {
        return Ok(false);
    }
    let timestamp = Utc::now();
    store.append(key, value, timestamp).await?;
    info!("inserted log: key={key} value={value} timestamp={timestamp}");
    Ok(true)
}

/// Spawns the telemetry command and feeds its stdout through the change
/// detection pipeline until the stream closes. Lines preceding the first
/// valid record are echoed so startup diagnostics stay visible.
pub async fn run_collector(store: &dyn ChangeStore, command: &str) -> Result<()> {
    let mut child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("spawning telemetry command '{command}'"))?;
    let stdout = child
        .stdout
        .take()
        .with_context(|| "capturing telemetry command stdout")?;
    let mut lines = BufReader::new(stdout).lines();
    let mut seen_first_record = false;
    while let Some(line) = lines
        .next_line()
        .await
        .with_context(|| "reading telemetry stream")?
    {
        match classify_line(&line) {
            LineClass::Record { key, value } => {
                seen_first_record = true;
                record_reading(store, &key, &value).await?;
            }
            LineClass::Malformed => {
                warn!("invalid log format: {}", line.trim());
            }
            LineClass::Passthrough => {
                if !seen_first_record {
                    println!("{}", line.trim_end());
                }
            }
        }
    }
    let output = child
        .wait_with_output()
        .await
        .with_context(|| "waiting for telemetry command")?;
    if !output.status.success() {
        return Err(CollectorError::UpstreamProcessFailure {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        }
        .into());
    }
    Ok(())
}
