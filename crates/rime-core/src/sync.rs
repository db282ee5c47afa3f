//! Custom config synchronizer
//!
//! Overlays user-authored override files onto the live config directory.
//! Runs any number of times; output is a pure projection of the overrides
//! directory plus the schema selection, so reruns are byte-identical.

use std::fs;
use std::path::{Path, PathBuf};

use rime_fs::{read_text, write_text};
use tracing::{debug, info};

use crate::patch::{RESERVED_STEM, inject_schema_list};
use crate::{Error, Result};

/// Override file extensions deployed by a sync pass.
const OVERRIDE_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Deploys override files from a local directory into the target.
pub struct Synchronizer {
    target: PathBuf,
    overrides: PathBuf,
}

impl Synchronizer {
    pub fn new(target: impl Into<PathBuf>, overrides: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            overrides: overrides.into(),
        }
    }

    /// Sync every override file into the target directory.
    ///
    /// Direct children with a `.yaml`/`.yml` extension are deployed with
    /// the extension normalized to `.yaml`; the reserved
    /// `default.custom` file additionally gets the schema selection
    /// spliced in unless it already declares one. Returns destination
    /// names in deploy order.
    ///
    /// A missing overrides directory is created empty and reported as
    /// nothing to sync, not an error. The first read or write failure
    /// aborts the pass.
    pub fn sync(&self, schemas: &[String]) -> Result<Vec<String>> {
        if !self.overrides.exists() {
            fs::create_dir_all(&self.overrides)
                .map_err(|e| Error::Fs(rime_fs::Error::io(&self.overrides, e)))?;
            info!(
                overrides = %self.overrides.display(),
                "created empty overrides directory, nothing to sync yet"
            );
            return Ok(Vec::new());
        }

        let mut files = self.override_files()?;
        files.sort();

        let mut deployed = Vec::new();
        for path in files {
            deployed.push(self.deploy_file(&path, schemas)?);
        }

        info!(count = deployed.len(), "overrides deployed");
        Ok(deployed)
    }

    /// Direct child files with an override extension, case-insensitive.
    fn override_files(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.overrides)
            .map_err(|e| Error::Fs(rime_fs::Error::io(&self.overrides, e)))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::Fs(rime_fs::Error::io(&self.overrides, e)))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let extension = path
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            if OVERRIDE_EXTENSIONS.contains(&extension.as_str()) {
                files.push(path);
            }
        }
        Ok(files)
    }

    fn deploy_file(&self, path: &Path, schemas: &[String]) -> Result<String> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        // Destination extension is always .yaml, whatever the source had.
        let dest_name = format!("{stem}.yaml");

        let content = read_text(path).map_err(|source| Error::SyncFailed {
            file: file_name.clone(),
            source,
        })?;

        let content = if stem == RESERVED_STEM {
            inject_schema_list(&content, schemas)
        } else {
            content.as_str().into()
        };

        write_text(&self.target.join(&dest_name), &content).map_err(|source| {
            Error::SyncFailed {
                file: file_name,
                source,
            }
        })?;

        debug!(dest = dest_name.as_str(), "deployed override");
        Ok(dest_name)
    }
}
