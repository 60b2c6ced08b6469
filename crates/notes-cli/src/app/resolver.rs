//! Path resolution for the config file and storage directory.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, NotesConfig};

/// Resolve the config file path, checking NOTES_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("NOTES_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the storage directory from CLI args (or NOTES_DIR) or config.
pub fn resolve_storage_dir(cli: &Cli, config: &NotesConfig) -> PathBuf {
    match cli.dir.as_deref() {
        Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(&config.storage.dir),
    }
}
