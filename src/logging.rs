//! Tracing setup
//!
//! The terminal is owned by the UI, so logs go to a file. Without a log file
//! no subscriber is installed and `tracing` macros are no-ops.

use crate::config::LOG_LEVEL_ENV_VAR;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Build the filter from `POKELINE_LOG_LEVEL`, defaulting to `info`
pub fn env_filter() -> EnvFilter {
    let level = std::env::var(LOG_LEVEL_ENV_VAR)
        .map(|level| level.to_lowercase())
        .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install a file-backed subscriber when `log_file` is given
pub fn init(log_file: Option<&str>) -> Result<()> {
    let Some(log_file) = log_file else {
        return Ok(());
    };

    let path = shellexpand::tilde(log_file).into_owned();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file '{path}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_timer(ChronoLocal::rfc_3339())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    tracing::info!("Tracing initialized, writing to {path}");
    Ok(())
}
