//! Interactive menu shown when no subcommand is given.
//!
//! Each action reuses the matching command handler. Errors are printed and
//! the menu keeps running.

use std::io::IsTerminal;

use dialoguer::{Input, Select};

use crate::app::AppContext;
use crate::cli::{
    AppendArgs, CreateArgs, DeleteArgs, EditArgs, ExportArgs, ListArgs, SearchArgs, ShowArgs,
    StatsArgs,
};
use crate::errors::CliError;
use crate::ui::print_error;

use super::{maintenance, notes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Create,
    List,
    Show,
    Edit,
    Delete,
    Append,
    Export,
    Search,
    Stats,
    Exit,
}

const ACTIONS: [(MenuAction, &str); 10] = [
    (MenuAction::Create, "Create new note"),
    (MenuAction::List, "View all notes"),
    (MenuAction::Show, "Read specific note"),
    (MenuAction::Edit, "Edit note"),
    (MenuAction::Delete, "Delete note"),
    (MenuAction::Append, "Append to note"),
    (MenuAction::Export, "Export all notes"),
    (MenuAction::Search, "Search notes"),
    (MenuAction::Stats, "Show statistics"),
    (MenuAction::Exit, "Exit"),
];

pub fn run_menu(ctx: &AppContext) -> anyhow::Result<()> {
    if !std::io::stdin().is_terminal() {
        return Err(CliError::invalid_input(
            "No command given and no TTY available for the interactive menu.\nHint: Run `notes --help` to see commands.",
        )
        .into());
    }

    let labels: Vec<&str> = ACTIONS.iter().map(|(_, label)| *label).collect();
    let ui = ctx.ui_context(false);
    tracing::info!("interactive menu started");

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Notes")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        let action = match choice {
            Some(i) => ACTIONS[i].0,
            None => MenuAction::Exit,
        };
        if action == MenuAction::Exit {
            println!("All your notes are saved in {}", ctx.storage_dir()?.display());
            return Ok(());
        }

        if let Err(e) = run_action(ctx, action) {
            print_error(&ui, &format!("{:#}", e), None);
        }
    }
}

fn prompt_title(prompt: &str) -> anyhow::Result<String> {
    let title: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(title)
}

fn run_action(ctx: &AppContext, action: MenuAction) -> anyhow::Result<()> {
    match action {
        MenuAction::Create => notes::handle_create(
            ctx,
            &CreateArgs {
                title: prompt_title("Note title")?,
                body: None,
            },
        ),
        MenuAction::List => notes::handle_list(ctx, &ListArgs { json: false }),
        MenuAction::Show => notes::handle_show(
            ctx,
            &ShowArgs {
                title: prompt_title("Note title to read")?,
                json: false,
            },
        ),
        MenuAction::Edit => notes::handle_edit(
            ctx,
            &EditArgs {
                title: prompt_title("Note title to edit")?,
                body: None,
            },
        ),
        MenuAction::Delete => notes::handle_delete(
            ctx,
            &DeleteArgs {
                title: prompt_title("Note title to delete")?,
                yes: false,
            },
        ),
        MenuAction::Append => notes::handle_append(
            ctx,
            &AppendArgs {
                title: prompt_title("Note title to append to")?,
                body: None,
            },
        ),
        MenuAction::Export => {
            let name: String = Input::new()
                .with_prompt("Export file name (without extension, empty for default)")
                .allow_empty(true)
                .interact_text()?;
            maintenance::handle_export(ctx, &ExportArgs { name: Some(name) })
        }
        MenuAction::Search => notes::handle_search(
            ctx,
            &SearchArgs {
                term: prompt_title("Search term")?,
                json: false,
            },
        ),
        MenuAction::Stats => maintenance::handle_stats(ctx, &StatsArgs { json: false }),
        MenuAction::Exit => Ok(()),
    }
}
