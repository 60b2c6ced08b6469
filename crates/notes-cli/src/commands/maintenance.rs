//! Export, statistics and configuration commands.

use notes_core::NoteStorage;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::{ConfigArgs, ExportArgs, StatsArgs};
use crate::config::{write_config, NotesConfig};
use crate::logging::log_path;
use crate::output::format_stats;
use crate::ui::{badge, header, kv, Badge};

/// Export file name for an optional user-supplied base name.
pub fn export_file_name(name: Option<&str>, now_millis: i64) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(base) => format!("{}.txt", base),
        None => format!("notes_export_{}.txt", now_millis),
    }
}

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let file_name = export_file_name(
        args.name.as_deref(),
        chrono::Utc::now().timestamp_millis(),
    );
    let path = store.dir().join(file_name);
    let count = store.export_all(&path)?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false);
        println!(
            "{}",
            badge(&ui, Badge::Ok, &format!("Exported {} note(s)", count))
        );
        println!("{}", kv(&ui, "File", &path.display().to_string()));
    }
    Ok(())
}

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let stats = store.statistics()?;
    let ui = ctx.ui_context(args.json);

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    if !ctx.quiet() {
        println!("{}", header(&ui, "App Statistics", None));
    }
    println!("{}", format_stats(&ui, &stats));
    Ok(())
}

pub fn handle_config(ctx: &AppContext, args: &ConfigArgs) -> anyhow::Result<()> {
    let path = resolve_config_path()?;
    let ui = ctx.ui_context(false);

    if args.init {
        if path.exists() {
            println!(
                "{}",
                badge(
                    &ui,
                    Badge::Info,
                    &format!("Config already exists at {}", path.display())
                )
            );
        } else {
            write_config(&path, &NotesConfig::default())?;
            println!(
                "{}",
                badge(&ui, Badge::Ok, &format!("Wrote {}", path.display()))
            );
        }
        return Ok(());
    }

    let config = ctx.config()?;
    let storage_dir = ctx.storage_dir()?;
    let config_label = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };

    println!("{}", kv(&ui, "Config file", &config_label));
    println!("{}", kv(&ui, "Storage dir", &storage_dir.display().to_string()));
    println!("{}", kv(&ui, "Log file", &log_path(&storage_dir).display().to_string()));
    println!("{}", kv(&ui, "Log level", &config.log.level));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name_from_user_input() {
        assert_eq!(export_file_name(Some(" backup "), 1), "backup.txt");
    }

    #[test]
    fn test_export_file_name_default() {
        assert_eq!(
            export_file_name(None, 1700000000123),
            "notes_export_1700000000123.txt"
        );
        assert_eq!(export_file_name(Some("   "), 5), "notes_export_5.txt");
    }
}
