//! Output formatting helpers for the CLI.

use notes_core::codec::{format_display, TIMESTAMP_FORMAT};
use notes_core::{Note, StorageStats};

use crate::ui::{kv, table, Column, UiContext};

/// Convert a note to JSON for output.
pub fn note_json(note: &Note) -> serde_json::Value {
    serde_json::json!({
        "title": note.title(),
        "content": note.content(),
        "created_at": note.created_at().format(TIMESTAMP_FORMAT).to_string(),
        "modified_at": note.modified_at().format(TIMESTAMP_FORMAT).to_string(),
    })
}

/// Convert multiple notes to a JSON array for output.
pub fn notes_json(notes: &[Note]) -> Vec<serde_json::Value> {
    notes.iter().map(note_json).collect()
}

/// Render a single note as human-readable text.
pub fn format_note(ctx: &UiContext, note: &Note) -> String {
    let mut lines = vec![
        kv(ctx, "Title", note.title()),
        kv(ctx, "Created", &format_display(&note.created_at())),
        kv(ctx, "Modified", &format_display(&note.modified_at())),
        kv(ctx, "Content", ""),
    ];
    lines.push(note.content().to_string());
    lines.join("\n")
}

/// Print a single note in human-readable format.
pub fn print_note(ctx: &UiContext, note: &Note) {
    println!("{}", format_note(ctx, note));
}

/// Render a numbered note overview table.
pub fn notes_table(ctx: &UiContext, notes: &[Note]) -> String {
    let columns = [
        Column::new("#"),
        Column::new("Title"),
        Column::new("Modified"),
        Column::new("Preview"),
    ];
    let rows: Vec<Vec<String>> = notes
        .iter()
        .enumerate()
        .map(|(i, note)| {
            vec![
                (i + 1).to_string(),
                note.title().to_string(),
                format_display(&note.modified_at()),
                preview(note.content(), 40),
            ]
        })
        .collect();
    table(ctx, &columns, &rows)
}

/// First line of `content`, cut to `max` characters.
fn preview(content: &str, max: usize) -> String {
    let first = content.lines().next().unwrap_or("");
    if first.chars().count() > max {
        let cut: String = first.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        first.to_string()
    }
}

/// Render the statistics report.
pub fn format_stats(ctx: &UiContext, stats: &StorageStats) -> String {
    [
        kv(ctx, "Total Notes", &stats.total_notes.to_string()),
        kv(ctx, "Total Files", &stats.total_files.to_string()),
        kv(ctx, "Total Storage Used", &format!("{} bytes", stats.total_bytes)),
        kv(ctx, "Notes Directory", &stats.directory.display().to_string()),
    ]
    .join("\n")
}
