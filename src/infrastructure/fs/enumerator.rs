//! File enumeration with exclusion filtering

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::entities::FileSet;
use crate::domain::ports::Logger;
use crate::domain::value_objects::ExcludePattern;
use crate::error::{PackResult, PackagingError};

/// List every regular file under `root`, relative and `/`-separated.
///
/// Hidden entries are included and symlinks followed. Paths are sorted so
/// the result is stable across runs. When `exclude` is given, matching
/// files are dropped from the set and deleted from disk.
pub fn list_files(
    root: &Path,
    exclude: Option<&ExcludePattern>,
    logger: &dyn Logger,
) -> PackResult<FileSet> {
    if !root.is_dir() {
        return Err(PackagingError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut entries = walk(root)?;
    entries.sort();
    let mut set = FileSet::from_entries(root, entries);

    if let Some(pattern) = exclude {
        let excluded = set.drain_matching(pattern);
        for (_, path) in &excluded {
            remove_excluded(path, logger);
        }
        logger.verbose(&format!(
            "Excluded {} file(s) from {}",
            excluded.len(),
            root.display()
        ));
    }

    if set.is_empty() {
        return Err(PackagingError::NoFilesToPackage {
            root: root.to_path_buf(),
        });
    }
    Ok(set)
}

/// `(posix name, real relative path)` for every regular file under `root`
fn walk(root: &Path) -> PackResult<Vec<(String, PathBuf)>> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(false)
        .follow_links(true)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| PackagingError::Enumerate {
            root: root.to_path_buf(),
            message: e.to_string(),
        })?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let Ok(rel_path) = entry.path().strip_prefix(root) else {
            continue;
        };
        files.push((to_posix(rel_path), rel_path.to_path_buf()));
    }
    Ok(files)
}

fn to_posix(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn remove_excluded(path: &Path, logger: &dyn Logger) {
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => logger.verbose(&format!(
            "Could not delete excluded file {}: {}",
            path.display(),
            e
        )),
    }
}
