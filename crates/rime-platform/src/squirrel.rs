//! Squirrel (鼠须管) on macOS

use std::path::PathBuf;
use std::process::Command;

use colored::Colorize;
use tracing::{info, warn};

use crate::{Error, Platform, Result};

pub struct Squirrel;

impl Platform for Squirrel {
    fn name(&self) -> &'static str {
        "Squirrel"
    }

    fn install_engine(&self) -> Result<()> {
        println!("{}", "Checking for Squirrel (鼠须管)...".cyan());
        match Command::new("brew")
            .args(["install", "--cask", "squirrel"])
            .status()
        {
            Ok(status) if status.success() => {
                info!("Squirrel installed via Homebrew");
                println!("{}", "Squirrel installed via Homebrew.".green());
            }
            Ok(_) => {
                warn!("brew install --cask squirrel failed");
                println!(
                    "{}",
                    "Homebrew install failed. Install Squirrel manually.".yellow()
                );
            }
            Err(e) => {
                warn!(error = %e, "Homebrew not found");
                println!(
                    "{}",
                    "Homebrew not found. Install Homebrew or install Squirrel manually.".red()
                );
            }
        }
        Ok(())
    }

    fn config_dir(&self) -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join("Library").join("Rime"))
            .ok_or(Error::NoHomeDir)
    }
}
