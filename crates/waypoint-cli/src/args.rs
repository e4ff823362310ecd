use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use waypoint_core::RecordId;

/// Terminal front end for the waypoint form wizard
///
/// Fill in contact info, details and items step by step, save the form under
/// a generated identifier and resume it later by passing that identifier.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, `run` starts a fresh session.
#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session reading commands from stdin
    #[command(alias = "r")]
    Run(RunArgs),
    /// Show a saved record as a resumed session would see it
    Show(ShowArgs),
    /// List saved records
    #[command(alias = "ls")]
    List,
    /// Delete a saved record
    Delete(DeleteArgs),
    /// Print the JSON schema of the persisted record
    Schema,
}

#[derive(ClapArgs)]
pub struct RunArgs {
    /// Identifier (or `/identifier` path) of a saved record to resume
    pub id: Option<RecordId>,
}

#[derive(ClapArgs)]
pub struct ShowArgs {
    /// Identifier of the record to show
    pub id: RecordId,
}

#[derive(ClapArgs)]
pub struct DeleteArgs {
    /// Identifier of the record to delete
    pub id: RecordId,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}
