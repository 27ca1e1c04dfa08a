//! Build output directories on local disk

use std::path::{Path, PathBuf};

use crate::domain::entities::{CompileResult, PackagingUnit};
use crate::domain::ports::BuildOutputs;

/// Directory name used for the unified (whole service) compile output
pub const SERVICE_OUTPUT_DIR: &str = "service";

/// Compiled output laid out as `<root>/<function>` or `<root>/service`
#[derive(Debug, Clone)]
pub struct DirectoryBuildOutputs {
    root: PathBuf,
}

impl DirectoryBuildOutputs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl BuildOutputs for DirectoryBuildOutputs {
    fn compile_result(&self, unit: &PackagingUnit) -> CompileResult {
        let dir = match unit {
            PackagingUnit::Function(name) => self.root.join(name),
            PackagingUnit::Service(_) => self.root.join(SERVICE_OUTPUT_DIR),
        };
        CompileResult::new(unit.clone(), dir)
    }
}
