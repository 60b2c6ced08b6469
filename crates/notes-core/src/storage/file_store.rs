//! Directory-backed note storage.
//!
//! Layout inside the storage directory:
//!
//! - `<sanitized title>.txt` - one encoded note per file
//! - `notes_index.txt` - `title:file name` rows, appended on every save
//!
//! Writes go straight to the target file (no temp file, no rename) and no
//! locks are taken.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use super::traits::NoteStorage;
use super::types::{SaveMode, StorageStats};
use crate::codec;
use crate::error::Result;
use crate::fs::{dir_usage, note_file_name};
use crate::index::{IndexStore, INDEX_FILE_NAME};
use crate::note::{self, Note};

/// Separator line written before an appended block.
pub const APPEND_SEPARATOR: &str = "=== APPENDED CONTENT ===";

/// First line of an export file.
pub const EXPORT_HEADER: &str = "=== NOTES EXPORT ===";

/// Note storage rooted at a single directory.
#[derive(Debug, Clone)]
pub struct FileNoteStore {
    dir: PathBuf,
    index: IndexStore,
}

impl FileNoteStore {
    /// Open storage at `dir`, creating the directory if it is missing.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                error!(dir = %dir.display(), error = %e, "failed to create notes directory");
                e
            })?;
            info!(dir = %dir.display(), "created notes directory");
        }
        let index = IndexStore::new(dir.join(INDEX_FILE_NAME));
        Ok(Self { dir, index })
    }

    /// Storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Title index backing this store.
    pub fn index(&self) -> &IndexStore {
        &self.index
    }

    /// Path of the note file for `title`.
    pub fn note_path(&self, title: &str) -> PathBuf {
        self.dir.join(note_file_name(title))
    }

    fn write_block(path: &Path, block: &str, mode: SaveMode) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.create(true);
        if mode.is_append() {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        let mut file = options.open(path)?;
        file.write_all(block.as_bytes())?;
        file.flush()
    }
}

/// Marker block written before an appended note.
fn append_marker() -> String {
    format!(
        "\n{}\nAppended at: {}\n",
        APPEND_SEPARATOR,
        codec::format_display(&note::now())
    )
}

impl NoteStorage for FileNoteStore {
    fn save(&self, note: &Note, mode: SaveMode) -> Result<PathBuf> {
        let path = self.note_path(note.title());

        let mut block = String::new();
        if mode.is_append() {
            block.push_str(&append_marker());
        }
        block.push_str(&codec::encode(&note.trimmed()));

        if let Err(e) = Self::write_block(&path, &block, mode) {
            error!(
                title = note.title(),
                path = %path.display(),
                error = %e,
                "failed to save note"
            );
            return Err(e.into());
        }

        // Rows hold the file name only, so the directory path never reaches
        // the `:`-separated index.
        let file_name = Path::new(path.file_name().unwrap_or_default());
        if let Err(e) = self.index.append(note.title(), file_name) {
            warn!(index = %self.index.path().display(), error = %e, "failed to update notes index");
        }

        info!(path = %path.display(), append = mode.is_append(), "note saved");
        Ok(path)
    }

    fn read(&self, path: &Path) -> Result<Option<Note>> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "note file not found");
                return Ok(None);
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to read note");
                return Err(e.into());
            }
        };

        match codec::decode(&text) {
            Ok(note) => {
                info!(path = %path.display(), "note read");
                Ok(Some(note))
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to decode note");
                Err(e)
            }
        }
    }

    fn read_by_title(&self, title: &str) -> Result<Option<Note>> {
        self.read(&self.note_path(title))
    }

    fn read_all(&self) -> Result<Vec<Note>> {
        let entries = self.index.list_all().map_err(|e| {
            error!(index = %self.index.path().display(), error = %e, "failed to read notes index");
            e
        })?;
        if entries.is_empty() && !self.index.path().exists() {
            info!("notes index not found; no notes exist yet");
        }

        let mut notes = Vec::with_capacity(entries.len());
        for entry in entries {
            // Relative rows resolve against the storage directory.
            if let Ok(Some(note)) = self.read(&self.dir.join(&entry.path)) {
                notes.push(note);
            }
        }
        Ok(notes)
    }

    fn delete(&self, title: &str) -> Result<bool> {
        let path = self.note_path(title);
        if !path.exists() {
            warn!(title, path = %path.display(), "note file does not exist");
            return Ok(false);
        }

        if let Err(e) = fs::remove_file(&path) {
            error!(title, path = %path.display(), error = %e, "failed to delete note");
            return Err(e.into());
        }

        match self.index.remove_all_entries_for(title) {
            Ok(removed) => debug!(title, removed, "index rows removed"),
            Err(e) => {
                warn!(index = %self.index.path().display(), error = %e, "failed to update index after removal")
            }
        }

        info!(path = %path.display(), "note deleted");
        Ok(true)
    }

    fn export_all(&self, path: &Path) -> Result<usize> {
        let notes = self.read_all()?;

        let mut out = String::new();
        out.push_str(EXPORT_HEADER);
        out.push('\n');
        out.push_str(&format!(
            "Export Date: {}\n",
            codec::format_display(&note::now())
        ));
        out.push_str(&format!("Total Notes: {}\n\n", notes.len()));
        for (i, note) in notes.iter().enumerate() {
            out.push_str(&format!("NOTE {}:\n", i + 1));
            out.push_str(&codec::encode(note));
            out.push('\n');
        }

        fs::write(path, out).map_err(|e| {
            error!(path = %path.display(), error = %e, "failed to export notes");
            e
        })?;

        info!(path = %path.display(), count = notes.len(), "notes exported");
        Ok(notes.len())
    }

    fn statistics(&self) -> Result<StorageStats> {
        let total_notes = self.read_all()?.len();
        let usage = dir_usage(&self.dir).map_err(|e| {
            error!(dir = %self.dir.display(), error = %e, "failed to list notes directory");
            e
        })?;
        let directory = fs::canonicalize(&self.dir).unwrap_or_else(|_| self.dir.clone());

        Ok(StorageStats {
            total_notes,
            total_files: usage.entries,
            total_bytes: usage.bytes,
            directory,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotesError;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("notes");
        let store = FileNoteStore::open(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(store.dir(), root.as_path());
    }

    #[test]
    fn test_note_path_uses_sanitized_title() {
        let dir = tempdir().unwrap();
        let store = FileNoteStore::open(dir.path()).unwrap();
        assert_eq!(
            store.note_path("My/Note:1"),
            dir.path().join("My_Note_1.txt")
        );
    }

    #[test]
    fn test_save_trims_stored_content() {
        let dir = tempdir().unwrap();
        let store = FileNoteStore::open(dir.path()).unwrap();
        let note = Note::new("Padded", "\n\n  hello  \n");

        let path = store.save(&note, SaveMode::Overwrite).unwrap();
        let read = store.read(&path).unwrap().unwrap();
        assert_eq!(read.content(), "hello");
        assert_eq!(read.created_at(), note.created_at());
    }

    #[test]
    fn test_overwrite_replaces_previous_content() {
        let dir = tempdir().unwrap();
        let store = FileNoteStore::open(dir.path()).unwrap();
        store
            .save(&Note::new("T", "first version"), SaveMode::Overwrite)
            .unwrap();
        let path = store
            .save(&Note::new("T", "second"), SaveMode::Overwrite)
            .unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("first version"));
        assert_eq!(raw.matches(codec::END_MARKER).count(), 1);
    }

    #[test]
    fn test_append_writes_marker_before_block() {
        let dir = tempdir().unwrap();
        let store = FileNoteStore::open(dir.path()).unwrap();
        store
            .save(&Note::new("T", "original"), SaveMode::Overwrite)
            .unwrap();
        let path = store
            .save(&Note::new("T", "extra"), SaveMode::Append)
            .unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let marker_at = raw.find(APPEND_SEPARATOR).unwrap();
        assert!(raw[..marker_at].contains("original"));
        assert!(raw[marker_at..].contains("Appended at: "));
        assert!(raw[marker_at..].contains("extra"));
    }

    #[test]
    fn test_read_missing_is_none() {
        let dir = tempdir().unwrap();
        let store = FileNoteStore::open(dir.path()).unwrap();
        assert!(store.read(&dir.path().join("nope.txt")).unwrap().is_none());
        assert!(store.read_by_title("nope").unwrap().is_none());
    }

    #[test]
    fn test_read_malformed_is_error() {
        let dir = tempdir().unwrap();
        let store = FileNoteStore::open(dir.path()).unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "just some text\n").unwrap();
        assert!(matches!(
            store.read(&path),
            Err(NotesError::MalformedData(_))
        ));
    }

    #[test]
    fn test_read_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let store = FileNoteStore::open(dir.path()).unwrap();
        let sub = dir.path().join("folder.txt");
        fs::create_dir(&sub).unwrap();
        assert!(matches!(store.read(&sub), Err(NotesError::Io(_))));
    }

    #[test]
    fn test_delete_missing_leaves_index() {
        let dir = tempdir().unwrap();
        let store = FileNoteStore::open(dir.path()).unwrap();
        fs::write(store.index().path(), "Ghost:somewhere.txt\n").unwrap();

        assert!(!store.delete("Ghost").unwrap());
        assert_eq!(
            fs::read_to_string(store.index().path()).unwrap(),
            "Ghost:somewhere.txt\n"
        );
    }

    #[test]
    fn test_search_uses_read_all() {
        let dir = tempdir().unwrap();
        let store = FileNoteStore::open(dir.path()).unwrap();
        store
            .save(&Note::new("Recipes", "Pancakes"), SaveMode::Overwrite)
            .unwrap();
        store
            .save(&Note::new("Work", "standup notes"), SaveMode::Overwrite)
            .unwrap();

        let found = store.search("PANCAKE").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title(), "Recipes");
    }
}
