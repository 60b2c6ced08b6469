//! # Notes Core
//!
//! Core library for Notes - a flat-file notes manager.
//!
//! This crate provides the note model, the on-disk text format, the title
//! index and the file-backed persistence service, independent of the CLI.
//!
//! ## Architecture
//!
//! - **note**: In-memory note entity
//! - **codec**: Line-oriented note file format
//! - **index**: Append-only `title:path` index file
//! - **storage**: Storage trait and the directory-backed implementation
//! - **search**: Case-insensitive title/content matching
//! - **fs**: File naming and directory listing helpers

pub mod codec;
pub mod error;
pub mod fs;
pub mod index;
pub mod note;
pub mod search;
pub mod storage;

pub use error::{NotesError, Result};
pub use note::Note;
pub use storage::{FileNoteStore, NoteStorage, SaveMode, StorageStats};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
