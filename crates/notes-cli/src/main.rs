//! Notes CLI - a plain-text notes manager
//!
//! This is the command-line interface for Notes. It wraps the core
//! persistence library with subcommands and an interactive menu.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{maintenance, menu, misc, notes};
use crate::errors::CliError;
use crate::ui::{badge, print_error, Badge};

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false);
        let code = e
            .downcast_ref::<CliError>()
            .map(CliError::exit_code)
            .unwrap_or(1);
        print_error(&ui_ctx, &format!("{:#}", e), None);
        std::process::exit(code);
    }
}

/// Send log events to the storage directory; failure only warns.
fn start_logging(ctx: &AppContext) -> anyhow::Result<()> {
    let dir = ctx.storage_dir()?;
    let level = ctx.config()?.log.level.clone();
    if let Err(e) = logging::init_logging(&dir, &level) {
        if !ctx.quiet() {
            let ui_ctx = ctx.ui_context(false);
            eprintln!("{}", badge(&ui_ctx, Badge::Warn, &format!("{:#}", e)));
        }
    }
    Ok(())
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    let uses_storage = cli.command.as_ref().map_or(true, Commands::uses_storage);
    if uses_storage {
        start_logging(ctx)?;
    }

    match &cli.command {
        Some(Commands::Create(args)) => notes::handle_create(ctx, args)?,
        Some(Commands::List(args)) => notes::handle_list(ctx, args)?,
        Some(Commands::Show(args)) => notes::handle_show(ctx, args)?,
        Some(Commands::Edit(args)) => notes::handle_edit(ctx, args)?,
        Some(Commands::Append(args)) => notes::handle_append(ctx, args)?,
        Some(Commands::Delete(args)) => notes::handle_delete(ctx, args)?,
        Some(Commands::Search(args)) => notes::handle_search(ctx, args)?,
        Some(Commands::Export(args)) => maintenance::handle_export(ctx, args)?,
        Some(Commands::Stats(args)) => maintenance::handle_stats(ctx, args)?,
        Some(Commands::Config(args)) => maintenance::handle_config(ctx, args)?,
        Some(Commands::Completions { shell }) => misc::handle_completions(*shell)?,
        None => menu::run_menu(ctx)?,
    }
    Ok(())
}
