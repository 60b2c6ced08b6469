//! Application context for the Notes CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded configuration file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use notes_core::FileNoteStore;

use crate::cli::Cli;
use crate::config::{read_config, NotesConfig};
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_storage_dir};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<NotesConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    ///
    /// A missing config file yields the defaults.
    pub fn config(&self) -> anyhow::Result<&NotesConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                read_config(&path)
            } else {
                Ok(NotesConfig::default())
            }
        })
    }

    /// Resolved storage directory.
    pub fn storage_dir(&self) -> anyhow::Result<PathBuf> {
        Ok(resolve_storage_dir(self.cli, self.config()?))
    }

    /// Open the note store, creating the storage directory if needed.
    pub fn open_store(&self) -> anyhow::Result<FileNoteStore> {
        let dir = self.storage_dir()?;
        FileNoteStore::open(&dir).map_err(|e| {
            anyhow::anyhow!("Failed to open notes directory {}: {}", dir.display(), e)
        })
    }

    /// Build the UI context for a command.
    pub fn ui_context(&self, json: bool) -> UiContext {
        UiContext::from_env(json, self.cli.no_color)
    }
}
