//! npm packager

use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::{DependencyTree, Lockfile, LockfileFormat};
use crate::domain::ports::{CommandOutput, CommandRunner, Packager, PackagerOptions, PackagerVersion};
use crate::domain::services::{rebase_npm_lockfile, rebase_yarn_lockfile};
use crate::error::{PackResult, PackagingError};
use crate::infrastructure::process::tool_program;

/// `npm ls` complaints that do not invalidate the reported tree
const IGNORABLE_LS_ERRORS: &[&str] = &[
    "npm ERR! extraneous",
    "npm ERR! missing",
    "npm ERR! peer dep missing",
];

pub struct NpmPackager {
    runner: Arc<dyn CommandRunner>,
}

impl NpmPackager {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    fn exec(&self, operation: &str, args: &[&str], cwd: &Path) -> PackResult<CommandOutput> {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        self.runner
            .run(&tool_program("npm"), &args, cwd)
            .map_err(|e| PackagingError::operation(self.id(), operation, cwd, e.to_string()))
    }

    fn exec_checked(&self, operation: &str, args: &[&str], cwd: &Path) -> PackResult<CommandOutput> {
        let output = self.exec(operation, args, cwd)?;
        if !output.success {
            return Err(PackagingError::operation(
                self.id(),
                operation,
                cwd,
                output.failure_summary(),
            ));
        }
        Ok(output)
    }
}

fn only_ignorable_ls_errors(stderr: &str) -> bool {
    stderr.lines().map(str::trim).all(|line| {
        line.is_empty() || IGNORABLE_LS_ERRORS.iter().any(|p| line.starts_with(p))
    })
}

impl Packager for NpmPackager {
    fn id(&self) -> &'static str {
        "npm"
    }

    fn lockfile_name(&self) -> &'static str {
        "package-lock.json"
    }

    fn lockfile_format(&self) -> LockfileFormat {
        LockfileFormat::Json
    }

    fn copy_package_section_names(&self) -> &'static [&'static str] {
        &[]
    }

    fn must_copy_modules(&self) -> bool {
        true
    }

    fn version(&self, cwd: &Path) -> PackResult<PackagerVersion> {
        let output = self.exec_checked("version", &["--version"], cwd)?;
        Ok(PackagerVersion::parse(&output.stdout))
    }

    fn production_dependencies(&self, cwd: &Path, depth: u32) -> PackResult<DependencyTree> {
        let depth_arg = format!("-depth={}", depth);
        let output = self.exec("ls", &["ls", "-prod", "-json", &depth_arg], cwd)?;

        let tolerated = !output.stdout.trim().is_empty() && only_ignorable_ls_errors(&output.stderr);
        if !output.success && !tolerated {
            return Err(PackagingError::operation(
                self.id(),
                "ls",
                cwd,
                output.failure_summary(),
            ));
        }

        serde_json::from_str(&output.stdout)
            .map_err(|e| PackagingError::operation(self.id(), "ls", cwd, e.to_string()))
    }

    fn rebase_lockfile(&self, path_to_package_root: &str, lockfile: Lockfile) -> Lockfile {
        match lockfile {
            Lockfile::Json(value) => Lockfile::Json(rebase_npm_lockfile(path_to_package_root, value)),
            Lockfile::Text(text) => Lockfile::Text(rebase_yarn_lockfile(path_to_package_root, &text)),
        }
    }

    fn install(&self, cwd: &Path, options: &PackagerOptions) -> PackResult<()> {
        let mut args = vec!["install"];
        if options.ignore_scripts {
            args.push("--ignore-scripts");
        }
        self.exec_checked("install", &args, cwd).map(|_| ())
    }

    fn prune(&self, cwd: &Path, _options: &PackagerOptions) -> PackResult<()> {
        self.exec_checked("prune", &["prune"], cwd).map(|_| ())
    }

    fn run_scripts(&self, cwd: &Path, script_names: &[String]) -> PackResult<()> {
        for script in script_names {
            self.exec_checked("run", &["run", script.as_str()], cwd)?;
        }
        Ok(())
    }
}
