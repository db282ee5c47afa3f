//! Rename-aside directory backups
//!
//! Before any destructive write the live config directory is moved to a
//! timestamped sibling. Backups are never deleted by this tool.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info};

use crate::{Error, Result};

/// Timestamp format used in backup directory names.
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Windows ERROR_SHARING_VIOLATION, the usual signature of a running
/// input-method service holding the directory open.
#[cfg(windows)]
const SHARING_VIOLATION: i32 = 32;

/// Back up a directory by renaming it to a timestamped sibling.
///
/// Returns the backup path, or `None` when `target` does not exist
/// (nothing to back up, not an error). After success nothing remains at
/// the original path.
///
/// A rename refused because another process holds the directory maps to
/// [`Error::ResourceBusy`] so callers can tell the user to stop the
/// input-method service and retry.
pub fn backup_dir(target: &Path) -> Result<Option<PathBuf>> {
    if !target.exists() {
        debug!(path = %target.display(), "no existing directory, skipping backup");
        return Ok(None);
    }

    let backup_path = next_backup_path(target);

    fs::rename(target, &backup_path).map_err(|e| {
        if is_busy(&e) {
            Error::ResourceBusy {
                path: target.to_path_buf(),
            }
        } else {
            Error::io(target, e)
        }
    })?;

    info!(
        from = %target.display(),
        to = %backup_path.display(),
        "backed up existing directory"
    );
    Ok(Some(backup_path))
}

/// Compute a free backup path next to `target`.
///
/// Second-resolution timestamps are enough for human-paced usage; a
/// same-second rerun gets a `_2`, `_3`, ... suffix instead of clobbering
/// the earlier backup.
fn next_backup_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "config".to_string());
    let parent = target.parent().unwrap_or_else(|| Path::new("."));
    let timestamp = Local::now().format(BACKUP_TIMESTAMP_FORMAT);

    let base = parent.join(format!("{name}_backup_{timestamp}"));
    if !base.exists() {
        return base;
    }

    let mut counter = 2u32;
    loop {
        let candidate = parent.join(format!("{name}_backup_{timestamp}_{counter}"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

fn is_busy(e: &std::io::Error) -> bool {
    if e.kind() == ErrorKind::PermissionDenied {
        return true;
    }
    #[cfg(windows)]
    if e.raw_os_error() == Some(SHARING_VIOLATION) {
        return true;
    }
    false
}
