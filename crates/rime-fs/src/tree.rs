//! Recursive merge-by-overwrite tree copy

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Copy every file under `src` into `dst`, preserving directory structure.
///
/// Same-named destination files are overwritten; files only present in
/// `dst` are left alone. Returns the number of files copied.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<u64> {
    fs::create_dir_all(dst).map_err(|e| Error::io(dst, e))?;

    let mut copied = 0u64;
    for entry in fs::read_dir(src).map_err(|e| Error::io(src, e))? {
        let entry = entry.map_err(|e| Error::io(src, e))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        let file_type = entry.file_type().map_err(|e| Error::io(&from, e))?;

        if file_type.is_dir() {
            copied += copy_tree(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(|e| Error::io(&from, e))?;
            copied += 1;
        }
    }

    debug!(src = %src.display(), dst = %dst.display(), copied, "copied tree");
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_copy_preserves_structure() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        fs::create_dir_all(src.join("opencc")).unwrap();
        fs::write(src.join("default.yaml"), "a").unwrap();
        fs::write(src.join("opencc/emoji.json"), "{}").unwrap();

        let copied = copy_tree(&src, &dst).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read_to_string(dst.join("default.yaml")).unwrap(), "a");
        assert_eq!(
            fs::read_to_string(dst.join("opencc/emoji.json")).unwrap(),
            "{}"
        );
    }

    #[test]
    fn test_copy_overwrites_but_keeps_unrelated_files() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(src.join("default.yaml"), "new").unwrap();
        fs::write(dst.join("default.yaml"), "old").unwrap();
        fs::write(dst.join("user.yaml"), "mine").unwrap();

        copy_tree(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("default.yaml")).unwrap(), "new");
        assert_eq!(fs::read_to_string(dst.join("user.yaml")).unwrap(), "mine");
    }

    #[test]
    fn test_copy_empty_source() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        fs::create_dir_all(&src).unwrap();

        assert_eq!(copy_tree(&src, &dst).unwrap(), 0);
        assert!(dst.is_dir());
    }
}
