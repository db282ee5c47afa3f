//! Base config installer
//!
//! Lays down an upstream bundle in the live config directory. Stages run
//! in order with no rollback of earlier stages; a later failure leaves
//! partial state for the operator to inspect, and the stage-1 backup
//! preserves whatever was there before.

use std::fs;
use std::path::{Path, PathBuf};

use rime_fetch::{ConfigSource, fetch_and_extract};
use rime_fs::{backup_dir, copy_tree, write_text};
use tracing::info;

use crate::patch::{PATCH_FILE_NAME, base_patch_document};
use crate::{Error, Result};

/// What an install run did, for reporting.
#[derive(Debug)]
pub struct InstallOutcome {
    /// Where the previous target contents went, if there were any
    pub backup: Option<PathBuf>,
    /// Files copied out of the bundle
    pub files_copied: u64,
    /// Whether a fresh base patch file was written
    pub wrote_base_patch: bool,
}

/// Installs an upstream bundle into the target config directory.
pub struct Installer {
    target: PathBuf,
}

impl Installer {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Full install: backup, fetch the source's bundle, deploy it.
    ///
    /// Idempotent: a rerun backs up the previous run's output and
    /// reproduces identical bytes for unchanged upstream files.
    pub fn install(&self, source: ConfigSource, schemas: &[String]) -> Result<InstallOutcome> {
        info!(
            source = source.id(),
            target = %self.target.display(),
            "installing base config"
        );
        let backup = self.prepare_target()?;
        let bundle = fetch_and_extract(source)?;
        self.deploy_bundle(bundle.root(), schemas, backup)
    }

    /// Install from an already-extracted bundle directory.
    ///
    /// Same pipeline as [`install`](Self::install) minus the network
    /// fetch; this is also what upgrade flows with a pre-fetched bundle
    /// use.
    pub fn install_from_dir(&self, bundle_root: &Path, schemas: &[String]) -> Result<InstallOutcome> {
        let backup = self.prepare_target()?;
        self.deploy_bundle(bundle_root, schemas, backup)
    }

    /// Stages 1 and 2: move any existing target aside, recreate it empty.
    fn prepare_target(&self) -> Result<Option<PathBuf>> {
        let backup = backup_dir(&self.target).map_err(Error::BackupFailed)?;
        fs::create_dir_all(&self.target)
            .map_err(|e| Error::Fs(rime_fs::Error::io(&self.target, e)))?;
        Ok(backup)
    }

    /// Stages 4 and 5: full-tree merge-by-overwrite copy, then the fresh
    /// base patch when the user has a schema selection.
    fn deploy_bundle(
        &self,
        bundle_root: &Path,
        schemas: &[String],
        backup: Option<PathBuf>,
    ) -> Result<InstallOutcome> {
        let files_copied = copy_tree(bundle_root, &self.target).map_err(|source| {
            Error::CopyFailed {
                path: self.target.clone(),
                source,
            }
        })?;

        let wrote_base_patch = !schemas.is_empty();
        if wrote_base_patch {
            let path = self.target.join(PATCH_FILE_NAME);
            // Always written fresh: this directly follows backup+reinstall,
            // so the file is the sole source of base patch content here.
            write_text(&path, &base_patch_document(schemas))
                .map_err(|source| Error::WriteFailed { path, source })?;
        }

        info!(files_copied, wrote_base_patch, "base config deployed");
        Ok(InstallOutcome {
            backup,
            files_copied,
            wrote_base_patch,
        })
    }
}
