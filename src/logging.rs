//! Log setup.
//!
//! The terminal belongs to the TUI while it runs, so logs go to a file.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber writing to `log_path`.
///
/// `RUST_LOG` overrides the level; otherwise `debug` when verbose, else `info`.
pub fn init(log_path: &Path, verbose: bool) -> Result<()> {
    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir)
            .context(format!("Failed to create log directory: {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .context(format!("Failed to open log file: {}", log_path.display()))?;

    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}
