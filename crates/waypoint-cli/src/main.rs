//! Waypoint CLI Application
//!
//! Terminal view layer for the waypoint form wizard.

mod args;
mod cli;
mod renderer;
mod session;

use anyhow::Result;
use args::{Args, Commands, DeleteArgs, RunArgs, ShowArgs};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use waypoint_core::WizardBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);
    let builder = WizardBuilder::new().with_database_path(database_file);

    info!("Waypoint started");

    match command.unwrap_or(Commands::Run(RunArgs { id: None })) {
        Commands::Run(RunArgs { id }) => {
            Cli::open(builder, id.clone(), renderer)?.run_session(id.as_ref())
        }
        Commands::Show(ShowArgs { id }) => {
            Cli::open(builder, Some(id.clone()), renderer)?.show_record(&id)
        }
        Commands::List => Cli::open(builder, None, renderer)?.list_records(),
        Commands::Delete(DeleteArgs { id, confirm }) => {
            Cli::open(builder, None, renderer)?.delete_record(&id, confirm)
        }
        Commands::Schema => {
            println!("{}", cli::record_schema()?);
            Ok(())
        }
    }
}
