//! Input helper functions for the CLI.

mod input;

pub use input::{read_note_body, require_title};
