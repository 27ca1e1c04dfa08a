//! Package Options

use std::path::PathBuf;

use crate::domain::value_objects::ExcludePattern;
use crate::infrastructure::fs::DEFAULT_COMPRESSION_LEVEL;

/// Default build output directory, relative to the project root
pub const DEFAULT_BUILD_OUTPUT: &str = ".webpack";

/// Options for the package use case
#[derive(Debug, Clone)]
pub struct PackageOptions {
    /// Project root; the deploy staging directory lives beneath it
    pub project_root: PathBuf,
    /// Build output root, resolved against `project_root` when relative
    pub build_output: PathBuf,
    /// Restrict archiving to these functions (individual mode only)
    pub functions: Vec<String>,
    /// Files matching this pattern are removed before archiving
    pub exclude: Option<ExcludePattern>,
    /// Upper bound on concurrent archive builds
    pub concurrency: usize,
    pub compression_level: i32,
    /// Skip archiving and distribute the archives already in the build output
    pub reuse_artifacts: bool,
}

impl PackageOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            build_output: PathBuf::from(DEFAULT_BUILD_OUTPUT),
            functions: Vec::new(),
            exclude: None,
            concurrency: default_concurrency(),
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            reuse_artifacts: false,
        }
    }

    pub fn with_build_output(mut self, build_output: impl Into<PathBuf>) -> Self {
        self.build_output = build_output.into();
        self
    }

    pub fn with_functions(mut self, functions: Vec<String>) -> Self {
        self.functions = functions;
        self
    }

    pub fn with_exclude(mut self, exclude: Option<ExcludePattern>) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_compression_level(mut self, level: i32) -> Self {
        self.compression_level = level;
        self
    }

    pub fn with_reuse_artifacts(mut self, reuse: bool) -> Self {
        self.reuse_artifacts = reuse;
        self
    }

    /// Selected functions, or `None` when every function is packaged
    pub fn selection(&self) -> Option<&[String]> {
        if self.functions.is_empty() {
            None
        } else {
            Some(&self.functions)
        }
    }
}

/// Available parallelism, falling back to one worker
pub fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
