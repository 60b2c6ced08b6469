//! Line-oriented note file format.
//!
//! ```text
//! TITLE:<title>
//! CREATED:<yyyy-MM-ddTHH:mm:ss>
//! MODIFIED:<yyyy-MM-ddTHH:mm:ss>
//! CONTENT:
//! <content lines>
//! ---END_NOTE---
//! ```
//!
//! Header prefixes are only recognized before the `CONTENT:` line. Once in
//! content mode every line up to the terminator belongs to the body, even if
//! it looks like a header.

use chrono::NaiveDateTime;

use crate::error::{NotesError, Result};
use crate::note::Note;

pub const TITLE_PREFIX: &str = "TITLE:";
pub const CREATED_PREFIX: &str = "CREATED:";
pub const MODIFIED_PREFIX: &str = "MODIFIED:";
pub const CONTENT_MARKER: &str = "CONTENT:";
pub const END_MARKER: &str = "---END_NOTE---";

/// Stored timestamp layout (seconds precision, no offset).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Human-facing timestamp layout used in append markers, exports and listings.
pub const DISPLAY_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Format a timestamp for display.
pub fn format_display(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

/// Encode a note as a single block, terminated by a newline.
pub fn encode(note: &Note) -> String {
    format!(
        "{TITLE_PREFIX}{}\n{CREATED_PREFIX}{}\n{MODIFIED_PREFIX}{}\n{CONTENT_MARKER}\n{}\n{END_MARKER}\n",
        note.title(),
        note.created_at().format(TIMESTAMP_FORMAT),
        note.modified_at().format(TIMESTAMP_FORMAT),
        note.content(),
    )
}

/// Decode the first note block found in `text`.
///
/// Scanning stops at the first terminator line, or at end of input. Title
/// and both timestamps are required; content may be empty.
///
/// # Errors
///
/// Returns `NotesError::MalformedData` if a required header is missing or a
/// timestamp does not parse.
pub fn decode(text: &str) -> Result<Note> {
    let mut title: Option<String> = None;
    let mut created: Option<NaiveDateTime> = None;
    let mut modified: Option<NaiveDateTime> = None;
    let mut content = String::new();
    let mut in_content = false;

    for line in text.lines() {
        if line == END_MARKER {
            break;
        }
        if in_content {
            content.push_str(line);
            content.push('\n');
            continue;
        }
        if let Some(rest) = line.strip_prefix(TITLE_PREFIX) {
            title = Some(rest.to_string());
        } else if let Some(rest) = line.strip_prefix(CREATED_PREFIX) {
            created = Some(parse_timestamp(rest)?);
        } else if let Some(rest) = line.strip_prefix(MODIFIED_PREFIX) {
            modified = Some(parse_timestamp(rest)?);
        } else if line == CONTENT_MARKER {
            in_content = true;
        }
    }

    // Drop the newline the encoder added after the body.
    if content.ends_with('\n') {
        content.pop();
    }

    match (title, created, modified) {
        (Some(title), Some(created), Some(modified)) => {
            Ok(Note::from_parts(title, content, created, modified))
        }
        (title, created, modified) => {
            let mut missing = Vec::new();
            if title.is_none() {
                missing.push("TITLE");
            }
            if created.is_none() {
                missing.push("CREATED");
            }
            if modified.is_none() {
                missing.push("MODIFIED");
            }
            Err(NotesError::MalformedData(format!(
                "invalid note format (missing {})",
                missing.join(", ")
            )))
        }
    }
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    Ok(NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn sample(content: &str) -> Note {
        Note::from_parts("Meeting", content, ts(9, 0, 0), ts(10, 30, 5))
    }

    #[test]
    fn test_encode_layout() {
        let encoded = encode(&sample("line one\nline two"));
        assert_eq!(
            encoded,
            "TITLE:Meeting\n\
             CREATED:2024-01-15T09:00:00\n\
             MODIFIED:2024-01-15T10:30:05\n\
             CONTENT:\n\
             line one\n\
             line two\n\
             ---END_NOTE---\n"
        );
    }

    #[test]
    fn test_round_trip_multiline() {
        let note = sample("first\n\n  indented\nlast");
        assert_eq!(decode(&encode(&note)).unwrap(), note);
    }

    #[test]
    fn test_round_trip_empty_content() {
        let note = sample("");
        let decoded = decode(&encode(&note)).unwrap();
        assert_eq!(decoded.content(), "");
        assert_eq!(decoded, note);
    }

    #[test]
    fn test_round_trip_trailing_blank_line() {
        let note = sample("body\n");
        assert_eq!(decode(&encode(&note)).unwrap().content(), "body\n");
    }

    #[test]
    fn test_header_lookalikes_inside_content_are_body() {
        let note = sample("TITLE:not a title\nCREATED:garbage\nCONTENT:");
        let decoded = decode(&encode(&note)).unwrap();
        assert_eq!(decoded.title(), "Meeting");
        assert_eq!(decoded.content(), "TITLE:not a title\nCREATED:garbage\nCONTENT:");
    }

    #[test]
    fn test_decode_stops_at_first_terminator() {
        let mut text = encode(&sample("first"));
        text.push_str("\n=== APPENDED CONTENT ===\n");
        text.push_str(&encode(&Note::from_parts(
            "Other",
            "second",
            ts(11, 0, 0),
            ts(11, 0, 0),
        )));
        let decoded = decode(&text).unwrap();
        assert_eq!(decoded.title(), "Meeting");
        assert_eq!(decoded.content(), "first");
    }

    #[test]
    fn test_decode_without_terminator_reads_to_end() {
        let text = "TITLE:t\nCREATED:2024-01-15T09:00:00\nMODIFIED:2024-01-15T09:00:00\nCONTENT:\na\nb\n";
        let decoded = decode(text).unwrap();
        assert_eq!(decoded.content(), "a\nb");
    }

    #[test]
    fn test_decode_missing_title_fails() {
        let text = "CREATED:2024-01-15T09:00:00\nMODIFIED:2024-01-15T09:00:00\nCONTENT:\nx\n---END_NOTE---\n";
        let err = decode(text).unwrap_err();
        assert!(matches!(err, NotesError::MalformedData(ref m) if m.contains("TITLE")));
    }

    #[test]
    fn test_decode_missing_timestamps_fails() {
        let err = decode("TITLE:t\nCONTENT:\nx\n---END_NOTE---\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("CREATED"));
        assert!(msg.contains("MODIFIED"));
    }

    #[test]
    fn test_decode_bad_timestamp_fails() {
        let text = "TITLE:t\nCREATED:15-01-2024 09:00\nMODIFIED:2024-01-15T09:00:00\nCONTENT:\n---END_NOTE---\n";
        assert!(matches!(
            decode(text),
            Err(NotesError::MalformedData(_))
        ));
    }

    #[test]
    fn test_decode_empty_input_fails() {
        assert!(decode("").is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(format_display(&ts(7, 5, 9)), "15-01-2024 07:05:09");
    }
}
