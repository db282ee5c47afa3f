//! Shared command context
//!
//! Built once at startup: the detected platform, the persisted settings,
//! and the directories every step operates on.

use std::path::PathBuf;

use rime_core::Settings;
use rime_platform::Platform;

use crate::cli::Cli;
use crate::error::Result;

pub struct AppContext {
    pub platform: Box<dyn Platform>,
    pub settings: Settings,
    /// Whether a settings file existed at startup (first-run detection)
    pub settings_found: bool,
    settings_path: PathBuf,
    target_override: Option<PathBuf>,
    pub overrides_dir: PathBuf,
}

impl AppContext {
    pub fn bootstrap(cli: &Cli) -> Result<Self> {
        let platform = rime_platform::detect()?;
        let settings_path = Settings::default_path()?;
        let (settings, settings_found) = Settings::load(&settings_path)?;

        Ok(Self {
            platform,
            settings,
            settings_found,
            settings_path,
            target_override: cli.target.clone(),
            overrides_dir: cli.overrides.clone(),
        })
    }

    /// The live config directory: the `--target` override when given,
    /// otherwise the platform convention.
    pub fn target_dir(&self) -> Result<PathBuf> {
        match &self.target_override {
            Some(dir) => Ok(dir.clone()),
            None => Ok(self.platform.config_dir()?),
        }
    }

    /// Persist the current settings (called after every mutation).
    pub fn save_settings(&self) -> Result<()> {
        self.settings.save(&self.settings_path)?;
        Ok(())
    }
}
