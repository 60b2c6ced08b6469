//! Storage trait definition.
//!
//! `NoteStorage` is the interface the CLI talks to. The only implementation
//! is `FileNoteStore`, which keeps one text file per note plus a title index
//! in a single directory.

use std::path::{Path, PathBuf};

use super::types::{SaveMode, StorageStats};
use crate::error::Result;
use crate::note::Note;
use crate::search;

/// Note persistence interface.
///
/// Implementations are single-writer: nothing here locks the underlying
/// files, and concurrent writers to the same storage are unsupported.
pub trait NoteStorage {
    /// Persist a note under the file derived from its title.
    ///
    /// Every successful save records a `title:path` index row, including
    /// repeated saves of the same title.
    ///
    /// # Returns
    ///
    /// Returns the path of the note file written.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Io` if the note file cannot be written.
    fn save(&self, note: &Note, mode: SaveMode) -> Result<PathBuf>;

    /// Read and decode a note file.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(note))` if found, `Ok(None)` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `NotesError::MalformedData` if the file does not decode, or
    /// `NotesError::Io` if it exists but cannot be read.
    fn read(&self, path: &Path) -> Result<Option<Note>>;

    /// Read the note stored for `title`.
    fn read_by_title(&self, title: &str) -> Result<Option<Note>>;

    /// Read every note reachable through the index, in index order.
    ///
    /// Rows whose file is missing or unreadable are skipped. Duplicate rows
    /// yield duplicate notes.
    fn read_all(&self) -> Result<Vec<Note>>;

    /// Delete the note file for `title` and its index rows.
    ///
    /// # Returns
    ///
    /// Returns `Ok(false)` if no file exists for the title; the index is left
    /// untouched in that case.
    fn delete(&self, title: &str) -> Result<bool>;

    /// Write all notes to a single export file, replacing it.
    ///
    /// # Returns
    ///
    /// Returns the number of notes exported.
    fn export_all(&self, path: &Path) -> Result<usize>;

    /// Report note count and storage directory usage.
    fn statistics(&self) -> Result<StorageStats>;

    /// Notes whose title or content contains `term`, ignoring case.
    fn search(&self, term: &str) -> Result<Vec<Note>> {
        Ok(search::filter_notes(self.read_all()?, term))
    }
}
