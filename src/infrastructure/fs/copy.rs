//! Artifact copy into the deploy staging directory

use std::fs::{self, File};
use std::io;
use std::path::Path;

use ignore::WalkBuilder;
use tempfile::NamedTempFile;

use crate::error::{PackResult, PackagingError};

/// Byte-copy `from` to `to`, creating parent directories as needed.
///
/// The destination is replaced atomically; a missing source is an error.
pub fn copy_artifact(from: &Path, to: &Path) -> PackResult<()> {
    copy_via_temp(from, to).map_err(|e| PackagingError::ArtifactCopy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        message: e.to_string(),
    })
}

fn copy_via_temp(from: &Path, to: &Path) -> io::Result<()> {
    let mut source = File::open(from)?;
    let parent = to
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent)?;
    io::copy(&mut source, temp.as_file_mut())?;
    temp.as_file().sync_all()?;
    temp.persist(to).map_err(|e| e.error)?;
    Ok(())
}

/// Recursively copy the directory `from` into `to`, merging with existing content.
pub fn copy_dir_all(from: &Path, to: &Path) -> PackResult<()> {
    let copy_err = |message: String| PackagingError::ArtifactCopy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        message,
    };
    if !from.is_dir() {
        return Err(PackagingError::DirectoryNotFound {
            path: from.to_path_buf(),
        });
    }

    let walker = WalkBuilder::new(from)
        .standard_filters(false)
        .hidden(false)
        .follow_links(true)
        .build();
    for entry in walker {
        let entry = entry.map_err(|e| copy_err(e.to_string()))?;
        let Ok(rel_path) = entry.path().strip_prefix(from) else {
            continue;
        };
        let target = to.join(rel_path);
        match entry.file_type() {
            Some(t) if t.is_dir() => {
                fs::create_dir_all(&target).map_err(|e| copy_err(e.to_string()))?
            }
            Some(t) if t.is_file() => {
                fs::copy(entry.path(), &target)
                    .map_err(|e| copy_err(format!("{}: {}", rel_path.display(), e)))?;
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copies_into_new_directory() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("build/svc.zip");
        let to = dir.path().join(".serverless/svc.zip");
        fs::create_dir_all(from.parent().unwrap()).unwrap();
        fs::write(&from, b"PK\x05\x06").unwrap();

        copy_artifact(&from, &to).unwrap();

        assert_eq!(fs::read(&to).unwrap(), b"PK\x05\x06");
        assert!(from.exists(), "build-stage artifact must be retained");
    }

    #[test]
    fn overwrites_existing_destination() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("a.zip");
        let to = dir.path().join("b.zip");
        fs::write(&from, "new").unwrap();
        fs::write(&to, "old").unwrap();

        copy_artifact(&from, &to).unwrap();

        assert_eq!(fs::read_to_string(&to).unwrap(), "new");
    }

    #[test]
    fn copy_dir_all_mirrors_tree() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("node_modules");
        fs::create_dir_all(from.join("lodash/fp")).unwrap();
        fs::write(from.join("lodash/index.js"), "module.exports = 1").unwrap();
        fs::write(from.join("lodash/fp/map.js"), "map").unwrap();
        fs::write(from.join(".yarn-integrity"), "{}").unwrap();
        let to = dir.path().join("unit/node_modules");

        copy_dir_all(&from, &to).unwrap();

        assert_eq!(
            fs::read_to_string(to.join("lodash/index.js")).unwrap(),
            "module.exports = 1"
        );
        assert!(to.join("lodash/fp/map.js").exists());
        assert!(to.join(".yarn-integrity").exists());
    }

    #[test]
    fn copy_dir_all_requires_source_directory() {
        let dir = tempdir().unwrap();
        let err = copy_dir_all(&dir.path().join("missing"), &dir.path().join("to")).unwrap_err();
        assert!(matches!(err, PackagingError::DirectoryNotFound { .. }));
    }

    #[test]
    fn missing_source_is_copy_error() {
        let dir = tempdir().unwrap();
        let to = dir.path().join("out/b.zip");

        let err = copy_artifact(&dir.path().join("missing.zip"), &to).unwrap_err();

        assert!(matches!(err, PackagingError::ArtifactCopy { .. }));
        assert!(!to.exists());
    }
}
