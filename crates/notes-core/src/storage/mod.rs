//! Storage layer: the `NoteStorage` trait and its directory-backed
//! implementation.

pub mod file_store;
pub mod traits;
pub mod types;

pub use file_store::FileNoteStore;
pub use traits::NoteStorage;
pub use types::{SaveMode, StorageStats};
