//! Weasel (小狼毫) on Windows

use std::path::PathBuf;
use std::process::{Command, Stdio};

use colored::Colorize;
use tracing::{debug, info, warn};

use crate::{Error, Platform, Result};

/// Processes that hold the Rime directory open while Weasel runs.
const WEASEL_PROCESSES: &[&str] = &["WeaselServer.exe", "WeaselDeployer.exe"];

pub struct Weasel;

impl Platform for Weasel {
    fn name(&self) -> &'static str {
        "Weasel"
    }

    fn install_engine(&self) -> Result<()> {
        println!("{}", "Checking for Weasel (小狼毫)...".cyan());
        let status = Command::new("winget")
            .args(["install", "Rime.Weasel", "-e", "--source", "winget"])
            .status();

        match status {
            Ok(status) if status.success() => {
                info!("Weasel installed via winget");
                println!("{}", "Weasel installed via winget.".green());
            }
            Ok(status) => {
                warn!(code = ?status.code(), "winget install did not succeed");
                println!(
                    "{}",
                    "winget install failed or Weasel is already present. \
                     Install Weasel manually if it is missing."
                        .yellow()
                );
            }
            Err(e) => {
                warn!(error = %e, "winget unavailable");
                println!(
                    "{}",
                    "winget not found. Install Weasel manually from the Rime site.".yellow()
                );
            }
        }
        Ok(())
    }

    fn stop_engine(&self) {
        println!(
            "{}",
            "Stopping the Weasel service to release file locks...".cyan()
        );
        for process in WEASEL_PROCESSES {
            let result = Command::new("taskkill")
                .args(["/F", "/IM", process])
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status();
            debug!(process, ok = result.is_ok(), "taskkill");
        }
    }

    fn config_dir(&self) -> Result<PathBuf> {
        // %APPDATA%\Rime
        dirs::config_dir()
            .map(|base| base.join("Rime"))
            .ok_or(Error::NoHomeDir)
    }

    fn post_deploy(&self) {
        println!(
            "{}",
            "Redeploy from the Weasel tray menu for changes to take effect.".yellow()
        );
    }
}
