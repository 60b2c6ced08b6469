//! Case-insensitive substring search over notes.

use crate::note::Note;

/// Whether `note`'s title or content contains `term`, ignoring case.
///
/// An empty term matches every note.
pub fn matches(note: &Note, term: &str) -> bool {
    let needle = term.to_lowercase();
    note.title().to_lowercase().contains(&needle)
        || note.content().to_lowercase().contains(&needle)
}

/// Keep the notes matching `term`, preserving order.
pub fn filter_notes(notes: Vec<Note>, term: &str) -> Vec<Note> {
    notes.into_iter().filter(|n| matches(n, term)).collect()
}
