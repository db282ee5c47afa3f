//! Rime Deploy CLI
//!
//! Interactive installer and upgrader for a Rime input-method
//! configuration: engine install, upstream bundle deploy, local override
//! sync.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use context::AppContext;
use error::Result;

fn main() {
    match run() {
        Ok(()) => {}
        // Exit-zero cancellation covers prompt interruptions; a SIGINT
        // mid-download or mid-copy takes the default disposition. That is
        // safe to leave alone: the fetch workdir is a scoped tempdir and
        // config writes are atomic, so no half-written target survives.
        Err(e) if e.is_interruption() => {
            println!("\n{}", "Cancelled.".yellow());
        }
        Err(e) => {
            interactive::report(&e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let mut ctx = AppContext::bootstrap(&cli)?;

    match cli.command {
        Some(cmd) => execute_command(cmd, &mut ctx),
        None => interactive::run_menu(&mut ctx),
    }
}

fn execute_command(cmd: Commands, ctx: &mut AppContext) -> Result<()> {
    match cmd {
        Commands::Auto => interactive::run_auto(ctx),
        Commands::Install => {
            commands::run_install(ctx)?;
            ctx.platform.post_deploy();
            Ok(())
        }
        Commands::Sync => {
            commands::run_sync(ctx)?;
            ctx.platform.post_deploy();
            Ok(())
        }
        Commands::Configure => interactive::run_configure(ctx),
        Commands::Status => commands::run_status(ctx),
    }
}
