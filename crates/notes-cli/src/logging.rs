//! File logging for the CLI.
//!
//! Events from both crates go to `<storage dir>/app.log`. Nothing is written
//! to the terminal so command output stays clean.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_LOG_LEVEL, LOG_FILE_NAME};

/// Path of the log file inside a storage directory.
pub fn log_path(storage_dir: &Path) -> PathBuf {
    storage_dir.join(LOG_FILE_NAME)
}

/// Build the event filter: `RUST_LOG` wins, then the configured level.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber writing to the log file.
///
/// Creates the storage directory if needed. Calling this twice fails on the
/// second call because a global subscriber is already set.
pub fn init_logging(storage_dir: &Path, level: &str) -> anyhow::Result<()> {
    std::fs::create_dir_all(storage_dir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create storage directory {}: {}",
            storage_dir.display(),
            e
        )
    })?;

    let path = log_path(storage_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| anyhow::anyhow!("Failed to open log file {}: {}", path.display(), e))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!(path = %path.display(), "logging initialized");
    Ok(())
}
