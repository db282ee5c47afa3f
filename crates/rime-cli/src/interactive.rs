//! Interactive prompts and menu flow
//!
//! Uses dialoguer for terminal-based selection. The menu mirrors the
//! tool's modes: auto setup for a first install, upgrade for an existing
//! one, plus direct sync and configuration entries.

use colored::Colorize;
use dialoguer::{Confirm, MultiSelect, Select};
use rime_fetch::ConfigSource;

use crate::commands;
use crate::context::AppContext;
use crate::error::{CliError, Result};

/// Entry point for `rime-deploy` without a subcommand.
pub fn run_menu(ctx: &mut AppContext) -> Result<()> {
    if !ctx.settings_found {
        println!(
            "{}",
            "Welcome! First run detected; choose a config source and your schemas.".yellow()
        );
        run_configure(ctx)?;
    }

    loop {
        println!("\n{}", "==================== Rime Deploy ====================".bold());
        println!(
            "{}",
            format!(
                "Config source: {} | schemas: {}",
                ctx.settings.config_source.id(),
                if ctx.settings.selected_schemas.is_empty() {
                    "(none)".to_string()
                } else {
                    ctx.settings.selected_schemas.join(", ")
                }
            )
            .dimmed()
        );

        let choice = Select::new()
            .with_prompt("Select a mode")
            .items(&[
                "Auto mode: first-time install",
                "Upgrade mode: update the tool or the config",
                "Sync overrides to Rime",
                "Configure source and schemas",
                "Quit",
            ])
            .default(0)
            .interact()?;

        let result = match choice {
            0 => run_auto(ctx),
            1 => upgrade_menu(ctx),
            2 => commands::run_sync(ctx).map(|()| ctx.platform.post_deploy()),
            3 => run_configure(ctx),
            _ => {
                println!("Bye!");
                return Ok(());
            }
        };

        // Interruptions propagate (clean exit); anything else is reported
        // and control returns to the menu.
        if let Err(e) = result {
            if e.is_interruption() {
                return Err(e);
            }
            report(&e);
        }
    }
}

/// Guided first-install flow: Steps 01 through 04 with confirmations.
pub fn run_auto(ctx: &mut AppContext) -> Result<()> {
    println!("\n{}", "Auto mode: guided first-time setup".green().bold());
    ensure_configured(ctx)?;

    if Confirm::new()
        .with_prompt("Run Step 01: install the Rime engine?")
        .default(true)
        .interact()?
    {
        commands::run_install_engine(ctx)?;
    }

    if Confirm::new()
        .with_prompt("Run Steps 02-04 (backup, install bundle, sync overrides)?")
        .default(true)
        .interact()?
    {
        commands::run_backup(ctx)?;
        commands::run_install(ctx)?;
        commands::run_sync(ctx)?;
    }

    println!("\n{}", "Auto mode finished.".green().bold());
    ctx.platform.post_deploy();
    Ok(())
}

/// Upgrade submenu: self-update, reinstall bundle, resync overrides.
fn upgrade_menu(ctx: &mut AppContext) -> Result<()> {
    loop {
        println!("\n{}", "Upgrade mode".yellow().bold());
        let choice = Select::new()
            .with_prompt("Select an upgrade")
            .items(&[
                "Update rime-deploy itself (git checkout only)",
                "Reinstall the upstream config bundle",
                "Resync local overrides",
                "Back to main menu",
            ])
            .default(3)
            .interact()?;

        match choice {
            0 => commands::run_self_update()?,
            1 => {
                commands::run_install(ctx)?;
                ctx.platform.post_deploy();
            }
            2 => {
                commands::run_sync(ctx)?;
                ctx.platform.post_deploy();
            }
            _ => return Ok(()),
        }
    }
}

/// Configuration flow: pick a source, then schemas from its catalog.
pub fn run_configure(ctx: &mut AppContext) -> Result<()> {
    let source = select_source(ctx.settings.config_source)?;
    ctx.settings.config_source = source;

    let schemas = select_schemas(source)?;
    ctx.settings.set_schemas(schemas);
    ctx.save_settings()?;
    println!(
        "{}",
        format!(
            "Saved: {} with schemas {}",
            source.id(),
            ctx.settings.selected_schemas.join(", ")
        )
        .green()
    );

    if ctx.settings_found
        && Confirm::new()
            .with_prompt("Selection changed. Sync to Rime now?")
            .default(true)
            .interact()?
    {
        commands::run_sync(ctx)?;
        ctx.platform.post_deploy();
    }
    Ok(())
}

/// Prompt for anything not configured yet, persisting the answers.
fn ensure_configured(ctx: &mut AppContext) -> Result<()> {
    if ctx.settings_found && !ctx.settings.selected_schemas.is_empty() {
        return Ok(());
    }
    run_configure(ctx)?;
    ctx.settings_found = true;
    Ok(())
}

fn select_source(current: ConfigSource) -> Result<ConfigSource> {
    let default = ConfigSource::ALL
        .iter()
        .position(|s| *s == current)
        .unwrap_or(0);
    let labels: Vec<&str> = ConfigSource::ALL.iter().map(|s| s.display_name()).collect();

    let choice = Select::new()
        .with_prompt("Choose the base config source")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(ConfigSource::ALL[choice])
}

fn select_schemas(source: ConfigSource) -> Result<Vec<String>> {
    let catalog = source.schema_catalog();
    let labels: Vec<String> = catalog
        .iter()
        .map(|s| format!("{} ({})", s.label, s.id))
        .collect();

    let picked = MultiSelect::new()
        .with_prompt("Schemas to enable (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()?;

    if picked.is_empty() {
        // Empty selection falls back to the source's full-pinyin default.
        println!(
            "{}",
            format!("Nothing selected, defaulting to {}", source.default_schema()).dimmed()
        );
        return Ok(vec![source.default_schema().to_string()]);
    }
    Ok(picked.iter().map(|&i| catalog[i].id.to_string()).collect())
}

/// Print an error the way the menu loop reports it.
pub fn report(error: &CliError) {
    eprintln!("{}: {}", "error".red().bold(), error);
    if error.is_resource_busy() {
        eprintln!(
            "{}",
            "The Rime engine still holds the config directory. \
             Quit it (tray icon -> exit) and retry."
                .yellow()
        );
    }
}
