//! Note entity.

use chrono::{Local, NaiveDateTime, SubsecRound};

/// A single note: title, body and its two timestamps.
///
/// Timestamps are local wall-clock times truncated to whole seconds, which is
/// the precision the file format stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    title: String,
    content: String,
    created_at: NaiveDateTime,
    modified_at: NaiveDateTime,
}

impl Note {
    /// Create a new note stamped with the current time.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = now();
        Self {
            title: title.into(),
            content: content.into(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Rebuild a note from stored fields.
    pub fn from_parts(
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: NaiveDateTime,
        modified_at: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            created_at,
            modified_at,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn modified_at(&self) -> NaiveDateTime {
        self.modified_at
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.touch();
    }

    /// Copy of this note with content trimmed, timestamps untouched.
    pub(crate) fn trimmed(&self) -> Self {
        Self {
            content: self.content.trim().to_string(),
            ..self.clone()
        }
    }

    // modified_at never goes below created_at, even if the clock stepped back.
    fn touch(&mut self) {
        self.modified_at = now().max(self.created_at);
    }
}

/// Current local time at seconds precision.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}
