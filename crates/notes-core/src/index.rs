//! Title index file.
//!
//! One `title:path` row per line. Inserts append, removals rewrite the whole
//! file. Rows are never deduplicated, so re-saving a title adds another row
//! pointing at the same file.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default index file name inside the storage directory.
pub const INDEX_FILE_NAME: &str = "notes_index.txt";

/// A parsed index row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub title: String,
    pub path: PathBuf,
}

/// Append-only index of note titles to file paths.
#[derive(Debug, Clone)]
pub struct IndexStore {
    path: PathBuf,
}

impl IndexStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the index file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a `title:path` row, creating the index if needed.
    pub fn append(&self, title: &str, note_path: &Path) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}:{}", title, note_path.display())
    }

    /// Read every well-formed row, in file order.
    ///
    /// Blank lines and rows that do not split into exactly two parts on `:`
    /// are skipped. A missing index yields no rows.
    pub fn list_all(&self) -> io::Result<Vec<IndexEntry>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        Ok(contents.lines().filter_map(parse_row).collect())
    }

    /// Drop every row starting with `title:` and rewrite the index.
    ///
    /// Matching is on the full `title:` prefix, so removing `A` leaves `AB`
    /// rows alone. A missing index is left missing.
    pub fn remove_all_entries_for(&self, title: &str) -> io::Result<usize> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e),
        };

        let prefix = format!("{}:", title);
        let mut kept = String::with_capacity(contents.len());
        let mut removed = 0;
        for line in contents.lines() {
            if line.starts_with(&prefix) {
                removed += 1;
            } else {
                kept.push_str(line);
                kept.push('\n');
            }
        }

        fs::write(&self.path, kept)?;
        Ok(removed)
    }
}

fn parse_row(line: &str) -> Option<IndexEntry> {
    if line.trim().is_empty() {
        return None;
    }
    let parts: Vec<&str> = line.split(':').collect();
    match parts.as_slice() {
        [title, path] => Some(IndexEntry {
            title: (*title).to_string(),
            path: PathBuf::from(path.trim()),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &Path) -> IndexStore {
        IndexStore::new(dir.join(INDEX_FILE_NAME))
    }

    #[test]
    fn test_missing_index_lists_nothing() {
        let dir = tempdir().unwrap();
        assert!(store_in(dir.path()).list_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_creates_and_accumulates() {
        let dir = tempdir().unwrap();
        let index = store_in(dir.path());
        index.append("A", Path::new("notes/A.txt")).unwrap();
        index.append("A", Path::new("notes/A.txt")).unwrap();

        let raw = fs::read_to_string(index.path()).unwrap();
        assert_eq!(raw, "A:notes/A.txt\nA:notes/A.txt\n");
        assert_eq!(index.list_all().unwrap().len(), 2);
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let dir = tempdir().unwrap();
        let index = store_in(dir.path());
        fs::write(
            index.path(),
            "garbage_no_colon\nA:notes/a.txt\n\n   \nx:y:z\n",
        )
        .unwrap();

        let entries = index.list_all().unwrap();
        assert_eq!(
            entries,
            vec![IndexEntry {
                title: "A".to_string(),
                path: PathBuf::from("notes/a.txt"),
            }]
        );
    }

    #[test]
    fn test_path_whitespace_is_trimmed() {
        let dir = tempdir().unwrap();
        let index = store_in(dir.path());
        fs::write(index.path(), "T:  notes/t.txt  \n").unwrap();
        let entries = index.list_all().unwrap();
        assert_eq!(entries[0].path, PathBuf::from("notes/t.txt"));
    }

    #[test]
    fn test_remove_uses_full_prefix() {
        let dir = tempdir().unwrap();
        let index = store_in(dir.path());
        fs::write(
            index.path(),
            "A:notes/A.txt\nAB:notes/AB.txt\nA:notes/A.txt\nB:notes/B.txt\n",
        )
        .unwrap();

        let removed = index.remove_all_entries_for("A").unwrap();
        assert_eq!(removed, 2);
        assert_eq!(
            fs::read_to_string(index.path()).unwrap(),
            "AB:notes/AB.txt\nB:notes/B.txt\n"
        );
    }

    #[test]
    fn test_remove_keeps_malformed_lines() {
        let dir = tempdir().unwrap();
        let index = store_in(dir.path());
        fs::write(index.path(), "junk\nA:a.txt\n").unwrap();
        index.remove_all_entries_for("A").unwrap();
        assert_eq!(fs::read_to_string(index.path()).unwrap(), "junk\n");
    }

    #[test]
    fn test_remove_on_missing_index_is_noop() {
        let dir = tempdir().unwrap();
        let index = store_in(dir.path());
        assert_eq!(index.remove_all_entries_for("A").unwrap(), 0);
        assert!(!index.path().exists());
    }
}
