//! Self-update of the tool checkout

use std::process::Command;

use colored::Colorize;
use tracing::warn;

use crate::error::Result;

/// Best-effort `git pull` in the current directory, for users running the
/// tool from a cloned checkout. Not having a checkout is not an error.
pub fn run_self_update() -> Result<()> {
    println!("{}", "Updating rime-deploy via git pull...".cyan());
    match Command::new("git").arg("pull").status() {
        Ok(status) if status.success() => {
            println!(
                "{}",
                "Updated. Restart rime-deploy to pick up the new version.".green()
            );
        }
        Ok(status) => {
            warn!(code = ?status.code(), "git pull failed");
            println!(
                "{}",
                "git pull failed; update the checkout manually.".yellow()
            );
        }
        Err(e) => {
            warn!(error = %e, "git unavailable");
            println!(
                "{}",
                "git not found or not a checkout; skipping self-update.".yellow()
            );
        }
    }
    Ok(())
}
