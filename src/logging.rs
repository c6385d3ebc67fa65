//! Log file setup.
//!
//! The game owns the terminal (alternate screen, raw mode), so logs never go to
//! stdout or stderr. Without `MEMORY_MATCH_LOG_PATH` no subscriber is installed
//! and `tracing` events are dropped.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::AppConfig;

/// Install the global subscriber. Returns false when logging is disabled.
pub fn init(config: &AppConfig) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))?;
    Ok(true)
}
