//! Note commands: create, list, show, edit, append, delete, search.

use dialoguer::Confirm;

use notes_core::{Note, NoteStorage, SaveMode};

use crate::app::AppContext;
use crate::cli::{AppendArgs, CreateArgs, DeleteArgs, EditArgs, ListArgs, SearchArgs, ShowArgs};
use crate::errors::CliError;
use crate::helpers::{read_note_body, require_title};
use crate::output::{note_json, notes_json, notes_table, print_note};
use crate::ui::{badge, header, hint, kv, Badge};

pub fn handle_create(ctx: &AppContext, args: &CreateArgs) -> anyhow::Result<()> {
    let title = require_title(&args.title)?;
    let store = ctx.open_store()?;
    let content = read_note_body(args.body.clone(), "Enter note content")?;

    let note = Note::new(title, content);
    let path = store.save(&note, SaveMode::Overwrite)?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false);
        println!("{}", badge(&ui, Badge::Ok, "Note created and saved"));
        println!("{}", kv(&ui, "File", &path.display().to_string()));
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let notes = store.read_all()?;
    let ui = ctx.ui_context(args.json);

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&notes_json(&notes))?);
        return Ok(());
    }

    if notes.is_empty() {
        println!("No notes found. Create your first note!");
        if !ctx.quiet() {
            println!("{}", hint(&ui, "notes create <TITLE>"));
        }
        return Ok(());
    }

    if !ctx.quiet() {
        println!("{}", header(&ui, "All Notes", None));
        println!("Found {} note(s):", notes.len());
    }
    println!("{}", notes_table(&ui, &notes));
    Ok(())
}

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let title = require_title(&args.title)?;
    let store = ctx.open_store()?;
    let note = store
        .read_by_title(&title)?
        .ok_or_else(|| CliError::note_not_found(&title))?;

    let ui = ctx.ui_context(args.json);
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&note_json(&note))?);
    } else {
        print_note(&ui, &note);
    }
    Ok(())
}

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let title = require_title(&args.title)?;
    let store = ctx.open_store()?;
    let mut note = store
        .read_by_title(&title)?
        .ok_or_else(|| CliError::note_not_found(&title))?;

    let ui = ctx.ui_context(false);
    if args.body.is_none() && ui.interactive {
        println!("Current note:");
        print_note(&ui, &note);
        println!();
    }

    let content = read_note_body(args.body.clone(), "Enter new content")?;
    note.set_content(content);
    store.save(&note, SaveMode::Overwrite)?;

    if !ctx.quiet() {
        println!("{}", badge(&ui, Badge::Ok, "Note updated"));
    }
    Ok(())
}

pub fn handle_append(ctx: &AppContext, args: &AppendArgs) -> anyhow::Result<()> {
    let title = require_title(&args.title)?;
    let store = ctx.open_store()?;
    if store.read_by_title(&title)?.is_none() {
        return Err(CliError::note_not_found(&title).into());
    }

    let content = read_note_body(args.body.clone(), "Enter content to append")?;
    store.save(&Note::new(title, content), SaveMode::Append)?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false);
        println!("{}", badge(&ui, Badge::Ok, "Content appended"));
    }
    Ok(())
}

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let title = require_title(&args.title)?;
    let store = ctx.open_store()?;
    if !store.note_path(&title).exists() {
        return Err(CliError::note_not_found(&title).into());
    }

    let ui = ctx.ui_context(false);
    if !args.yes {
        if !ui.interactive {
            return Err(CliError::invalid_input(format!(
                "Refusing to delete '{}' without confirmation; pass --yes",
                title
            ))
            .into());
        }
        let confirmed = Confirm::new()
            .with_prompt(format!("Are you sure you want to delete '{}'?", title))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Delete operation cancelled.");
            return Ok(());
        }
    }

    if !store.delete(&title)? {
        return Err(CliError::note_not_found(&title).into());
    }

    if !ctx.quiet() {
        println!("{}", badge(&ui, Badge::Ok, "Note deleted"));
    }
    Ok(())
}

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let term = args.term.trim();
    let notes = store.search(term)?;
    let ui = ctx.ui_context(args.json);

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&notes_json(&notes))?);
        return Ok(());
    }

    if notes.is_empty() {
        println!("No notes found matching: {}", term);
        return Ok(());
    }

    if !ctx.quiet() {
        println!("{}", header(&ui, "Search", Some(term)));
        println!("Found {} matching note(s):", notes.len());
    }
    println!("{}", notes_table(&ui, &notes));
    Ok(())
}
