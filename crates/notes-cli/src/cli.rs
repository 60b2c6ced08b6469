use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use notes_core::VERSION;

/// Notes - a plain-text notes manager backed by a directory of files
#[derive(Parser)]
#[command(name = "notes")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Storage directory for notes, the index and the log
    #[arg(short, long, global = true, env = "NOTES_DIR")]
    pub dir: Option<String>,

    /// Run this command, or open the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a note (overwrites a note with the same title)
    Create(CreateArgs),

    /// List all notes
    List(ListArgs),

    /// Show a note by title
    Show(ShowArgs),

    /// Replace the content of an existing note
    Edit(EditArgs),

    /// Append a new block to an existing note file
    Append(AppendArgs),

    /// Delete a note by title
    Delete(DeleteArgs),

    /// Export all notes into a single file in the storage directory
    Export(ExportArgs),

    /// Search note titles and content (case-insensitive)
    Search(SearchArgs),

    /// Show storage statistics
    Stats(StatsArgs),

    /// Show or initialize the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

impl Commands {
    /// Whether the command reads or writes the storage directory.
    pub fn uses_storage(&self) -> bool {
        !matches!(self, Commands::Config(_) | Commands::Completions { .. })
    }
}

/// Arguments for the `create` command
#[derive(Args)]
pub struct CreateArgs {
    /// Note title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Note content (otherwise read from stdin until a line containing END)
    #[arg(long)]
    pub body: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Note title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Note title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// New content (otherwise read from stdin until a line containing END)
    #[arg(long)]
    pub body: Option<String>,
}

/// Arguments for the `append` command
#[derive(Args)]
pub struct AppendArgs {
    /// Note title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Content to append (otherwise read from stdin until a line containing END)
    #[arg(long)]
    pub body: Option<String>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Note title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Export file name without extension (defaults to notes_export_<millis>)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Search term
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command
#[derive(Args)]
pub struct ConfigArgs {
    /// Write a default config file if none exists
    #[arg(long)]
    pub init: bool,
}
