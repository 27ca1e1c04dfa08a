//! Error types for fnpack
//!
//! Uses `thiserror` for library errors. Every variant names the path or
//! identifier involved so the top-level orchestrator can report it verbatim.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fnpack operations
pub type PackResult<T> = Result<T, PackagingError>;

/// Main error type for packaging operations
#[derive(Error, Debug)]
pub enum PackagingError {
    /// Packager id is not in the registration table
    #[error("could not find packager '{id}'")]
    PackagerNotFound { id: String },

    /// Filtered file set of a packaging unit is empty
    #[error("packaging: no files found in {root}")]
    NoFilesToPackage { root: PathBuf },

    /// Reading a source file or writing the archive stream failed
    #[error("failed to write archive {path}: {message}")]
    ArchiveWrite { path: PathBuf, message: String },

    /// Build-stage artifact missing or unreadable during distribution
    #[error("failed to copy artifact {from} to {to}: {message}")]
    ArtifactCopy {
        from: PathBuf,
        to: PathBuf,
        message: String,
    },

    /// A dependency-management operation failed
    #[error("{packager} {operation} failed in {cwd}: {message}")]
    PackagerOperation {
        packager: String,
        operation: String,
        cwd: PathBuf,
        message: String,
    },

    /// Exclusion pattern is not a valid regular expression
    #[error("invalid exclude pattern '{pattern}': {message}")]
    InvalidExcludePattern { pattern: String, message: String },

    /// Host reported a version string that cannot be compared
    #[error("invalid host version '{version}'")]
    InvalidHostVersion { version: String },

    /// Compile output directory does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Walking a compile output directory failed
    #[error("failed to enumerate {root}: {message}")]
    Enumerate { root: PathBuf, message: String },

    /// Function selection names a function the service does not define
    #[error("function '{name}' is not defined in the service")]
    UnknownFunction { name: String },

    /// Service manifest or package.json could not be read or written
    #[error("invalid manifest {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PackagingError {
    /// Build a `PackagerOperation` error for the given packager/operation pair.
    pub fn operation(
        packager: &str,
        operation: &str,
        cwd: &std::path::Path,
        message: impl Into<String>,
    ) -> Self {
        Self::PackagerOperation {
            packager: packager.to_string(),
            operation: operation.to_string(),
            cwd: cwd.to_path_buf(),
            message: message.into(),
        }
    }
}
