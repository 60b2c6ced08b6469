//! Error types for Notes core operations.
//!
//! Absence is not an error at this level: reads report a missing note as
//! `Ok(None)` and deletes as `Ok(false)`. The CLI layer maps the remaining
//! variants to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for Notes operations.
pub type Result<T> = std::result::Result<T, NotesError>;

/// Core error type for Notes operations.
#[derive(Debug, Error)]
pub enum NotesError {
    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Stored data could not be decoded
    #[error("Malformed data: {0}")]
    MalformedData(String),

    /// Filesystem read/write/delete failure
    #[error("I/O error: {0}")]
    Io(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for NotesError {
    fn from(err: std::io::Error) -> Self {
        NotesError::Io(err.to_string())
    }
}

impl From<chrono::ParseError> for NotesError {
    fn from(err: chrono::ParseError) -> Self {
        NotesError::MalformedData(format!("invalid timestamp: {}", err))
    }
}
