//! The four deploy steps
//!
//! Step 01 installs the engine, Step 02 backs up the live config, Step 03
//! installs the upstream bundle, Step 04 syncs local overrides. The menu
//! and the non-interactive subcommands both come through here.

use colored::Colorize;
use rime_core::{Installer, Synchronizer};
use rime_fs::backup_dir;
use tracing::info;

use crate::context::AppContext;
use crate::error::Result;

/// Step 01: install the input-method engine.
pub fn run_install_engine(ctx: &AppContext) -> Result<()> {
    println!("\n{}", "Step 01: install the Rime engine".bold());
    ctx.platform.install_engine()?;
    println!(
        "{}",
        "Make sure Rime is selected as the system input method \
         (Windows may need a re-login)."
            .yellow()
    );
    Ok(())
}

/// Step 02: back up the live config directory without reinstalling.
pub fn run_backup(ctx: &AppContext) -> Result<()> {
    println!("\n{}", "Step 02: back up the current Rime config".bold());
    let target = ctx.target_dir()?;
    match backup_dir(&target)? {
        Some(backup) => println!(
            "{} {}",
            "Existing config backed up to".green(),
            backup.display()
        ),
        None => println!("{}", "No existing config found, nothing to back up.".dimmed()),
    }
    Ok(())
}

/// Step 03: stop the engine and install the upstream bundle.
pub fn run_install(ctx: &AppContext) -> Result<()> {
    let source = ctx.settings.config_source;
    println!(
        "\n{}",
        format!("Step 03: install the {} bundle", source.id()).bold()
    );

    ctx.platform.stop_engine();
    let target = ctx.target_dir()?;
    println!(
        "{}",
        format!("Installing {} into {}...", source.display_name(), target.display()).cyan()
    );

    let outcome =
        Installer::new(&target).install(source, &ctx.settings.selected_schemas)?;

    if let Some(backup) = &outcome.backup {
        println!("{} {}", "Previous config moved to".yellow(), backup.display());
    }
    info!(files = outcome.files_copied, "bundle installed");
    println!(
        "{}",
        format!("Base config installed ({} files).", outcome.files_copied).green()
    );
    if outcome.wrote_base_patch {
        println!(
            "{}",
            format!(
                "Generated base patch for: {}",
                ctx.settings.selected_schemas.join(", ")
            )
            .dimmed()
        );
    }
    Ok(())
}

/// Step 04: sync local overrides into the target directory.
pub fn run_sync(ctx: &AppContext) -> Result<()> {
    println!(
        "\n{}",
        format!(
            "Step 04: sync overrides from {}",
            ctx.overrides_dir.display()
        )
        .bold()
    );

    let target = ctx.target_dir()?;
    let deployed =
        Synchronizer::new(&target, &ctx.overrides_dir).sync(&ctx.settings.selected_schemas)?;

    if deployed.is_empty() {
        println!(
            "{}",
            format!(
                "Nothing to sync; put .yaml overrides in {} and re-run.",
                ctx.overrides_dir.display()
            )
            .yellow()
        );
    } else {
        for name in &deployed {
            println!("  {} {}", "deployed".dimmed(), name);
        }
        println!("{}", "Overrides synced to the Rime directory.".green().bold());
    }
    Ok(())
}
