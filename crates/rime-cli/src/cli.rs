//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Rime Deploy - install and maintain a Rime input-method configuration
#[derive(Parser, Debug)]
#[command(name = "rime-deploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the target Rime config directory (default: the platform
    /// convention for the detected front-end)
    #[arg(long, global = true, value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Local overrides directory synced into the target
    #[arg(long, global = true, value_name = "DIR", default_value = "custom_config")]
    pub overrides: PathBuf,

    /// The command to run; without one, the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Guided first-time setup: install the engine, back up, install the
    /// upstream bundle, sync overrides
    Auto,

    /// Install/update the upstream config bundle (backs up the current
    /// target first)
    Install,

    /// Sync local override files into the target directory
    ///
    /// Safe to re-run any number of times; the overrides directory is the
    /// source of truth and the target is overwritten from it.
    Sync,

    /// Choose the config source and input schemas
    Configure,

    /// Show current settings and resolved directories
    Status,
}
