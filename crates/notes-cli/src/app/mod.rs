//! Application-level utilities for the Notes CLI.
//!
//! This module provides:
//! - Path resolution for the config file and storage directory
//! - The lazily-configured application context

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::{resolve_config_path, resolve_storage_dir};
