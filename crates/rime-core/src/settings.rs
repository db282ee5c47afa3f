//! Persisted user choices
//!
//! Two values survive across runs: which upstream bundle to install and
//! which schemas to enable. They are loaded once at startup, passed
//! explicitly through the call chain, and saved on every mutation; there
//! is no ambient global state.

use std::path::{Path, PathBuf};

use rime_fetch::ConfigSource;
use rime_fs::ConfigStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

const SETTINGS_DIR: &str = "rime-deploy";
const SETTINGS_FILE: &str = "settings.toml";

/// Cross-invocation user choices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Upstream configuration bundle variant
    pub config_source: ConfigSource,
    /// Enabled schemas, in selection order (drives `schema_list` order)
    #[serde(default)]
    pub selected_schemas: Vec<String>,
}

impl Settings {
    /// Conventional settings location: `<user-config-dir>/rime-deploy/settings.toml`.
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|base| base.join(SETTINGS_DIR).join(SETTINGS_FILE))
            .ok_or(Error::NoConfigDir)
    }

    /// Load settings from `path`, or defaults when no file exists yet.
    ///
    /// Returns the settings plus whether a file was found, so the CLI can
    /// run first-time configuration when it was not.
    pub fn load(path: &Path) -> Result<(Self, bool)> {
        if !path.is_file() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok((Self::default(), false));
        }
        let settings = ConfigStore::new().load(path)?;
        Ok((settings, true))
    }

    /// Save settings to `path` (atomic write).
    pub fn save(&self, path: &Path) -> Result<()> {
        ConfigStore::new().save(path, self)?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Replace the schema selection, keeping first-occurrence order and
    /// dropping duplicate identifiers.
    pub fn set_schemas(&mut self, schemas: impl IntoIterator<Item = String>) {
        let mut unique = Vec::new();
        for schema in schemas {
            if !unique.contains(&schema) {
                unique.push(schema);
            }
        }
        self.selected_schemas = unique;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_through_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");

        let mut settings = Settings {
            config_source: ConfigSource::RimeFrost,
            ..Default::default()
        };
        settings.set_schemas(["rime_frost".to_string(), "rime_frost_double_pinyin".to_string()]);
        settings.save(&path).unwrap();

        let (loaded, found) = Settings::load(&path).unwrap();
        assert!(found);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let (settings, found) = Settings::load(&temp.path().join("settings.toml")).unwrap();

        assert!(!found);
        assert_eq!(settings.config_source, ConfigSource::RimeIce);
        assert!(settings.selected_schemas.is_empty());
    }

    #[test]
    fn test_set_schemas_keeps_order_and_uniqueness() {
        let mut settings = Settings::default();
        settings.set_schemas(
            ["b", "a", "b", "c", "a"].iter().map(|s| s.to_string()),
        );
        assert_eq!(settings.selected_schemas, vec!["b", "a", "c"]);
    }
}
