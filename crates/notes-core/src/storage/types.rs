//! Data types shared by storage implementations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How a save treats an existing note file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveMode {
    /// Truncate and replace the file.
    #[default]
    Overwrite,
    /// Keep existing content and add a marked block after it.
    Append,
}

impl SaveMode {
    pub fn is_append(self) -> bool {
        matches!(self, SaveMode::Append)
    }
}

/// Storage usage report.
///
/// `total_notes` counts notes reachable through the index that decode
/// successfully. `total_files` and `total_bytes` come from a raw listing of
/// the storage directory and include the index, log and export files, so
/// the two counts can disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageStats {
    /// Decoded notes reachable via the index (duplicates included)
    pub total_notes: usize,

    /// Entries in the storage directory
    pub total_files: usize,

    /// Total size of regular files in the storage directory
    pub total_bytes: u64,

    /// Storage directory, absolute when it could be resolved
    pub directory: PathBuf,
}
