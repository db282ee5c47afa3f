//! Current configuration overview

use colored::Colorize;

use crate::context::AppContext;
use crate::error::Result;

pub fn run_status(ctx: &AppContext) -> Result<()> {
    println!("{}", "rime-deploy status".bold());
    println!(
        "  {}: {}",
        "Front-end".dimmed(),
        ctx.platform.name().cyan()
    );
    println!(
        "  {}: {}",
        "Config source".dimmed(),
        ctx.settings.config_source.display_name().cyan()
    );
    if ctx.settings.selected_schemas.is_empty() {
        println!("  {}: {}", "Schemas".dimmed(), "(not configured)".yellow());
    } else {
        println!(
            "  {}: {}",
            "Schemas".dimmed(),
            ctx.settings.selected_schemas.join(", ").cyan()
        );
    }
    println!(
        "  {}: {}",
        "Target dir".dimmed(),
        ctx.target_dir()?.display()
    );
    println!(
        "  {}: {}",
        "Overrides dir".dimmed(),
        ctx.overrides_dir.display()
    );
    if !ctx.settings_found {
        println!(
            "\n{}",
            "No settings saved yet; run `rime-deploy configure` first.".yellow()
        );
    }
    Ok(())
}
