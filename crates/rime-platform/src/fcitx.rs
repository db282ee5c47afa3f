//! fcitx5-rime on Linux

use std::path::PathBuf;
use std::process::Command;

use colored::Colorize;
use tracing::{info, warn};

use crate::{Error, Platform, Result};

/// Package managers probed in order, with the install command for each.
const PACKAGE_MANAGERS: &[(&str, &[&str])] = &[
    ("apt", &["sudo", "apt", "install", "fcitx5-rime"]),
    ("pacman", &["sudo", "pacman", "-S", "fcitx5-rime"]),
    ("dnf", &["sudo", "dnf", "install", "fcitx5-rime"]),
];

pub struct Fcitx5;

impl Platform for Fcitx5 {
    fn name(&self) -> &'static str {
        "fcitx5-rime"
    }

    fn install_engine(&self) -> Result<()> {
        println!(
            "{}",
            "Linux detected. Trying to install fcitx5-rime (recommended)...".cyan()
        );

        for (manager, command) in PACKAGE_MANAGERS {
            if which::which(manager).is_err() {
                continue;
            }
            println!("Running: {}", command.join(" "));
            match Command::new(command[0]).args(&command[1..]).status() {
                Ok(status) if status.success() => {
                    info!(manager, "fcitx5-rime installed");
                    return Ok(());
                }
                Ok(_) => {
                    warn!(manager, "install command failed");
                    println!("{}", format!("Install via {manager} failed.").red());
                }
                Err(e) => {
                    warn!(manager, error = %e, "install command could not run");
                }
            }
        }

        println!(
            "{}",
            "No supported package manager succeeded. \
             Install 'fcitx5-rime' manually."
                .yellow()
        );
        Ok(())
    }

    fn config_dir(&self) -> Result<PathBuf> {
        // fcitx5 front-end convention: ~/.local/share/fcitx5/rime
        dirs::data_dir()
            .map(|data| data.join("fcitx5").join("rime"))
            .ok_or(Error::NoHomeDir)
    }
}
