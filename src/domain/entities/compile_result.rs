//! Compile result entity - one compiled output directory per packaging unit

use std::path::{Path, PathBuf};

/// Granularity of a single compiled output and a single archive
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PackagingUnit {
    Function(String),
    Service(String),
}

impl PackagingUnit {
    /// Archive identity (function or service name)
    pub fn identity(&self) -> &str {
        match self {
            PackagingUnit::Function(name) | PackagingUnit::Service(name) => name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PackagingUnit::Function(_) => "function",
            PackagingUnit::Service(_) => "service",
        }
    }
}

/// Output of the bundler stage for one packaging unit. Read-only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileResult {
    unit: PackagingUnit,
    output_path: PathBuf,
}

impl CompileResult {
    pub fn new(unit: PackagingUnit, output_path: impl Into<PathBuf>) -> Self {
        Self {
            unit,
            output_path: output_path.into(),
        }
    }

    pub fn unit(&self) -> &PackagingUnit {
        &self.unit
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
