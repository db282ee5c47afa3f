//! Zip extraction with bundle flattening

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::ZipArchive;

use crate::{Error, Result};

/// Extract a bundle zip into `dest` and resolve the effective source root.
///
/// GitHub archive zips unpack into a single `<repo>-<branch>/` directory;
/// when the archive root holds exactly one directory and nothing else,
/// that inner directory is the root we deploy from. Any other layout uses
/// the extraction root itself.
pub fn extract_bundle(zip_path: &Path, dest: &Path) -> Result<PathBuf> {
    let file = File::open(zip_path).map_err(|e| Error::io(zip_path, e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| Error::Extract {
        path: zip_path.to_path_buf(),
        message: e.to_string(),
    })?;

    fs::create_dir_all(dest).map_err(|e| Error::io(dest, e))?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| Error::Extract {
            path: zip_path.to_path_buf(),
            message: e.to_string(),
        })?;

        // Reject entries that would escape the extraction root
        let Some(relative) = entry.enclosed_name() else {
            return Err(Error::Extract {
                path: zip_path.to_path_buf(),
                message: format!("unsafe entry name: {}", entry.name()),
            });
        };
        let out_path = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| Error::io(&out_path, e))?;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            }
            let mut out = File::create(&out_path).map_err(|e| Error::io(&out_path, e))?;
            io::copy(&mut entry, &mut out).map_err(|e| Error::io(&out_path, e))?;
        }
    }

    let root = flatten_root(dest)?;
    debug!(root = %root.display(), "extracted bundle");
    Ok(root)
}

/// Apply the single-top-level-directory flattening rule.
fn flatten_root(dest: &Path) -> Result<PathBuf> {
    let mut entries = fs::read_dir(dest).map_err(|e| Error::io(dest, e))?;

    let first = match entries.next() {
        Some(entry) => entry.map_err(|e| Error::io(dest, e))?,
        None => return Ok(dest.to_path_buf()),
    };
    if entries.next().is_some() {
        return Ok(dest.to_path_buf());
    }

    let path = first.path();
    if path.is_dir() {
        Ok(path)
    } else {
        Ok(dest.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn build_zip(path: &Path, entries: &[(&str, &str)]) {
        let file = File::create(path).unwrap();
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        for (name, content) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_single_top_dir_is_flattened() {
        let temp = TempDir::new().unwrap();
        let zip_path = temp.path().join("bundle.zip");
        build_zip(
            &zip_path,
            &[
                ("rime-ice-main/default.yaml", "schema_list: []\n"),
                ("rime-ice-main/opencc/emoji.json", "{}"),
            ],
        );

        let root = extract_bundle(&zip_path, &temp.path().join("out")).unwrap();

        assert_eq!(root.file_name().unwrap(), "rime-ice-main");
        assert_eq!(
            fs::read_to_string(root.join("default.yaml")).unwrap(),
            "schema_list: []\n"
        );
        assert!(root.join("opencc/emoji.json").is_file());
    }

    #[test]
    fn test_multi_entry_root_is_not_flattened() {
        let temp = TempDir::new().unwrap();
        let zip_path = temp.path().join("bundle.zip");
        build_zip(
            &zip_path,
            &[("default.yaml", "a"), ("weasel.yaml", "b")],
        );

        let out = temp.path().join("out");
        let root = extract_bundle(&zip_path, &out).unwrap();

        assert_eq!(root, out);
        assert!(root.join("default.yaml").is_file());
        assert!(root.join("weasel.yaml").is_file());
    }

    #[test]
    fn test_unsafe_entry_rejected() {
        let temp = TempDir::new().unwrap();
        let zip_path = temp.path().join("bundle.zip");
        build_zip(&zip_path, &[("../escape.yaml", "x")]);

        let err = extract_bundle(&zip_path, &temp.path().join("out")).unwrap_err();
        assert!(matches!(err, Error::Extract { .. }));
    }
}
