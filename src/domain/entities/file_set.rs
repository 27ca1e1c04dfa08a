//! File set entity - ordered relative paths under a compile output directory
//!
//! Lives only for the duration of one archive build. Each member has a
//! POSIX-style (`/`-separated) name used for matching and archive entries,
//! and the relative path it was found at, used for every disk access.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ExcludePattern;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSet {
    root: PathBuf,
    files: Vec<String>,
    sources: Vec<PathBuf>,
}

impl FileSet {
    /// Build a set whose names are also the on-disk relative paths
    pub fn new(root: impl Into<PathBuf>, files: Vec<String>) -> Self {
        let sources = files.iter().map(PathBuf::from).collect();
        Self {
            root: root.into(),
            files,
            sources,
        }
    }

    /// Build a set from `(name, relative source path)` pairs.
    ///
    /// The two differ when a file name is not valid UTF-8.
    pub fn from_entries(root: impl Into<PathBuf>, entries: Vec<(String, PathBuf)>) -> Self {
        let (files, sources) = entries.into_iter().unzip();
        Self {
            root: root.into(),
            files,
            sources,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }

    /// Members as `(name, absolute source path)`
    pub fn entries(&self) -> impl Iterator<Item = (&str, PathBuf)> + '_ {
        self.files
            .iter()
            .zip(&self.sources)
            .map(|(name, source)| (name.as_str(), self.root.join(source)))
    }

    /// Remove every member matching `pattern` in a single pass.
    ///
    /// Returns the removed names in their original order.
    pub fn remove_matching(&mut self, pattern: &ExcludePattern) -> Vec<String> {
        self.drain_matching(pattern)
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    /// Like `remove_matching`, but also hands back each removed member's
    /// absolute source path.
    pub fn drain_matching(&mut self, pattern: &ExcludePattern) -> Vec<(String, PathBuf)> {
        let files = std::mem::take(&mut self.files);
        let sources = std::mem::take(&mut self.sources);
        let mut removed = Vec::new();
        for (name, source) in files.into_iter().zip(sources) {
            if pattern.is_match(&name) {
                removed.push((name, self.root.join(source)));
            } else {
                self.files.push(name);
                self.sources.push(source);
            }
        }
        removed
    }
}
