//! Package Result

use serde::Serialize;

use crate::domain::entities::FunctionArtifactBinding;
use crate::domain::value_objects::PackagingMode;
use crate::infrastructure::fs::ArchiveSummary;

/// Result of a package run
#[derive(Debug, Clone, Serialize)]
pub struct PackageResult {
    pub mode: PackagingMode,
    /// Archives built during this run, in unit order (empty when reusing)
    pub archives: Vec<ArchiveSummary>,
    pub binding: FunctionArtifactBinding,
}

impl PackageResult {
    pub fn archive_count(&self) -> usize {
        self.archives.len()
    }

    pub fn reused_artifacts(&self) -> bool {
        self.archives.is_empty()
    }
}
