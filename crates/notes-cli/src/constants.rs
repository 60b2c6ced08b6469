//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Note not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}

/// Default storage directory, relative to the working directory.
pub const DEFAULT_STORAGE_DIR: &str = "notes";

/// Log file name inside the storage directory.
pub const LOG_FILE_NAME: &str = "app.log";

/// Default log level when RUST_LOG is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Line that ends multi-line content typed on stdin.
pub const CONTENT_TERMINATOR: &str = "END";
