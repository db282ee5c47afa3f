//! Command implementations shared by the subcommands and the menu

mod status;
mod steps;
mod upgrade;

pub use status::run_status;
pub use steps::{run_backup, run_install, run_install_engine, run_sync};
pub use upgrade::run_self_update;
