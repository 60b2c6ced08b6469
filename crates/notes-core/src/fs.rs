//! Filesystem helpers for note file naming and directory usage.

use std::fs;
use std::io;
use std::path::Path;

/// Extension used for every note file.
pub const NOTE_EXTENSION: &str = "txt";

/// Make a title safe to use as a file stem.
///
/// Every character outside `[A-Za-z0-9._-]` becomes `_`. The mapping is
/// per character, so distinct titles may share a stem.
pub fn sanitize_file_name(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// File name (`<stem>.txt`) for a note title.
pub fn note_file_name(title: &str) -> String {
    format!("{}.{}", sanitize_file_name(title), NOTE_EXTENSION)
}

/// Raw listing totals for a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirUsage {
    /// Number of directory entries, of any kind
    pub entries: usize,
    /// Sum of regular file sizes in bytes
    pub bytes: u64,
}

/// List a directory (non-recursive) and total its entries and file sizes.
///
/// A missing directory yields zero totals.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be listed.
pub fn dir_usage(dir: &Path) -> io::Result<DirUsage> {
    let mut usage = DirUsage::default();
    if !dir.exists() {
        return Ok(usage);
    }
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        usage.entries += 1;
        let metadata = entry.metadata()?;
        if metadata.is_file() {
            usage.bytes += metadata.len();
        }
    }
    Ok(usage)
}
