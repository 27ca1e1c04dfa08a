//! Packager port - a pluggable dependency-management backend
//!
//! Each supported tool (npm, yarn) implements the full capability set.
//! Every operation is an independently failable, possibly long-running
//! process invocation; failures surface as `PackagingError::PackagerOperation`.

use std::path::Path;

use crate::domain::entities::{DependencyTree, Lockfile, LockfileFormat};
use crate::error::PackResult;

/// Options forwarded to install/prune
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackagerOptions {
    /// Skip lifecycle scripts during install
    pub ignore_scripts: bool,
}

/// Parsed `<tool> --version` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagerVersion {
    pub raw: String,
    pub major: Option<u64>,
}

impl PackagerVersion {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim().trim_start_matches('v').to_string();
        let major = raw.split('.').next().and_then(|m| m.parse().ok());
        Self { raw, major }
    }
}

impl std::fmt::Display for PackagerVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Capability set of a dependency-management tool
pub trait Packager: Send + Sync {
    /// Registry identifier (`npm`, `yarn`)
    fn id(&self) -> &'static str;

    /// File name of the tool's lockfile
    fn lockfile_name(&self) -> &'static str;

    fn lockfile_format(&self) -> LockfileFormat;

    /// `package.json` sections copied verbatim into generated manifests
    fn copy_package_section_names(&self) -> &'static [&'static str];

    /// Whether installed `node_modules` must be copied into each unit
    fn must_copy_modules(&self) -> bool;

    fn version(&self, cwd: &Path) -> PackResult<PackagerVersion>;

    /// Production dependency tree of the package in `cwd`, `depth` levels deep
    fn production_dependencies(&self, cwd: &Path, depth: u32) -> PackResult<DependencyTree>;

    /// Rewrite relative `file:` references so they resolve from a new location
    fn rebase_lockfile(&self, path_to_package_root: &str, lockfile: Lockfile) -> Lockfile;

    fn install(&self, cwd: &Path, options: &PackagerOptions) -> PackResult<()>;

    fn prune(&self, cwd: &Path, options: &PackagerOptions) -> PackResult<()>;

    /// Run the named package scripts in order
    fn run_scripts(&self, cwd: &Path, script_names: &[String]) -> PackResult<()>;
}
