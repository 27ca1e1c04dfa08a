//! Zip archive builder
//!
//! Archives are written to a temporary file beside the target and only
//! renamed into place once the zip directory has been written and the file
//! synced, so a failed build never leaves a half-written archive at the
//! target path.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::domain::entities::FileSet;
use crate::domain::ports::Logger;
use crate::error::{PackResult, PackagingError};

/// Default deflate level
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 6;

const LOCK_DIR: &str = ".locks";

/// Description of a finished archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    pub entries: usize,
    pub bytes: u64,
    pub sha256: String,
}

#[derive(Debug, Clone, Copy)]
pub struct ZipArchiveBuilder {
    compression_level: i32,
}

impl Default for ZipArchiveBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_COMPRESSION_LEVEL)
    }
}

impl ZipArchiveBuilder {
    /// Levels outside 0..=9 are clamped
    pub fn new(compression_level: i32) -> Self {
        Self {
            compression_level: compression_level.clamp(0, 9),
        }
    }

    pub fn compression_level(&self) -> i32 {
        self.compression_level
    }

    /// Write every file of `files` into a zip at `archive_path`.
    ///
    /// Entries keep `FileSet` order and carry a fixed timestamp, so the same
    /// input always yields the same bytes.
    pub fn build(
        &self,
        files: &FileSet,
        archive_path: &Path,
        logger: &dyn Logger,
    ) -> PackResult<ArchiveSummary> {
        let write_err = |message: String| PackagingError::ArchiveWrite {
            path: archive_path.to_path_buf(),
            message,
        };

        let parent = match archive_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| write_err(e.to_string()))?;

        let lock_path = lock_path(archive_path, &parent);
        if let Some(dir) = lock_path.parent() {
            fs::create_dir_all(dir).map_err(|e| write_err(e.to_string()))?;
        }
        let lock_file = File::create(&lock_path).map_err(|e| write_err(e.to_string()))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| write_err(e.to_string()))?;

        let result = self.write_locked(files, archive_path, &parent, logger);

        let _ = lock_file.unlock();
        result.map_err(write_err)
    }

    fn write_locked(
        &self,
        files: &FileSet,
        archive_path: &Path,
        parent: &Path,
        logger: &dyn Logger,
    ) -> Result<ArchiveSummary, String> {
        let mut temp = NamedTempFile::new_in(parent).map_err(|e| e.to_string())?;

        let total = files.len();
        let mut processed = 0usize;
        {
            let mut zip = ZipWriter::new(temp.as_file_mut());
            for (rel_path, source) in files.entries() {
                let mut reader = File::open(&source)
                    .map_err(|e| format!("{}: {}", source.display(), e))?;
                let mode = file_mode(&reader);

                zip.start_file(rel_path, self.entry_options(mode))
                    .map_err(|e| format!("{}: {}", rel_path, e))?;
                io::copy(&mut reader, &mut zip)
                    .map_err(|e| format!("{}: {}", source.display(), e))?;

                processed += 1;
                if processed == total {
                    logger.verbose(&format!(
                        "Zip {}: {} file(s) written",
                        archive_path.display(),
                        processed
                    ));
                }
            }
            zip.finish().map_err(|e| e.to_string())?;
        }
        temp.as_file().sync_all().map_err(|e| e.to_string())?;

        let (bytes, sha256) = digest(temp.path()).map_err(|e| e.to_string())?;
        temp.persist(archive_path)
            .map_err(|e| e.error.to_string())?;

        Ok(ArchiveSummary {
            path: archive_path.to_path_buf(),
            entries: processed,
            bytes,
            sha256,
        })
    }

    fn entry_options(&self, mode: u32) -> FileOptions {
        FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(self.compression_level))
            .last_modified_time(DateTime::default())
            .unix_permissions(mode)
    }
}

/// `<parent>/.locks/<archive name>.lock`, kept apart from the artifacts
fn lock_path(archive_path: &Path, parent: &Path) -> PathBuf {
    let mut name = archive_path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("archive"));
    name.push(".lock");
    parent.join(LOCK_DIR).join(name)
}

#[cfg(unix)]
fn file_mode(file: &File) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    file.metadata()
        .map(|m| m.permissions().mode() & 0o7777)
        .unwrap_or(0o644)
}

#[cfg(not(unix))]
fn file_mode(_file: &File) -> u32 {
    0o644
}

fn digest(path: &Path) -> io::Result<(u64, String)> {
    let mut hasher = Sha256::new();
    let bytes = io::copy(&mut File::open(path)?, &mut hasher)?;
    Ok((bytes, format!("{:x}", hasher.finalize())))
}
