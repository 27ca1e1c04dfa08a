//! yarn packager
//!
//! yarn keeps its lockfile in a custom text format and installs straight
//! into each unit, so `node_modules` never needs to be copied.

use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::{DependencyTree, Lockfile, LockfileFormat};
use crate::domain::ports::{CommandOutput, CommandRunner, Packager, PackagerOptions, PackagerVersion};
use crate::domain::services::{parse_yarn_list, rebase_npm_lockfile, rebase_yarn_lockfile};
use crate::error::{PackResult, PackagingError};
use crate::infrastructure::process::tool_program;

pub struct YarnPackager {
    runner: Arc<dyn CommandRunner>,
}

impl YarnPackager {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    fn exec(&self, operation: &str, args: &[&str], cwd: &Path) -> PackResult<CommandOutput> {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        self.runner
            .run(&tool_program("yarn"), &args, cwd)
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

fn only_warnings(stderr: &str) -> bool {
    stderr
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with("warning"))
}

impl Packager for YarnPackager {
    fn id(&self) -> &'static str {
        "yarn"
    }

    fn lockfile_name(&self) -> &'static str {
        "yarn.lock"
    }

    fn lockfile_format(&self) -> LockfileFormat {
        LockfileFormat::Text
    }

    fn copy_package_section_names(&self) -> &'static [&'static str] {
        &["resolutions"]
    }

    fn must_copy_modules(&self) -> bool {
        false
    }

    fn version(&self, cwd: &Path) -> PackResult<PackagerVersion> {
        let output = self.exec_checked("version", &["-v"], cwd)?;
        Ok(PackagerVersion::parse(&output.stdout))
    }

    fn production_dependencies(&self, cwd: &Path, depth: u32) -> PackResult<DependencyTree> {
        let depth_arg = format!("--depth={}", depth);
        let output = self.exec("list", &["list", &depth_arg, "--json", "--production"], cwd)?;

        if !output.success && !only_warnings(&output.stderr) {
            return Err(PackagingError::operation(
                self.id(),
                "list",
                cwd,
                output.failure_summary(),
            ));
        }

        parse_yarn_list(&output.stdout)
            .map_err(|e| PackagingError::operation(self.id(), "list", cwd, e.to_string()))
    }

    fn rebase_lockfile(&self, path_to_package_root: &str, lockfile: Lockfile) -> Lockfile {
        match lockfile {
            Lockfile::Text(text) => Lockfile::Text(rebase_yarn_lockfile(path_to_package_root, &text)),
            Lockfile::Json(value) => Lockfile::Json(rebase_npm_lockfile(path_to_package_root, value)),
        }
    }

    fn install(&self, cwd: &Path, options: &PackagerOptions) -> PackResult<()> {
        let mut args = vec!["install", "--frozen-lockfile", "--non-interactive"];
        if options.ignore_scripts {
            args.push("--ignore-scripts");
        }
        self.exec_checked("install", &args, cwd).map(|_| ())
    }

    /// yarn has no prune; a frozen install removes anything not in the lockfile
    fn prune(&self, cwd: &Path, options: &PackagerOptions) -> PackResult<()> {
        self.install(cwd, options)
    }

    fn run_scripts(&self, cwd: &Path, script_names: &[String]) -> PackResult<()> {
        for script in script_names {
            self.exec_checked("run", &["run", script.as_str()], cwd)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::command_runner::testing::ScriptedRunner;

    fn packager(runner: ScriptedRunner) -> (YarnPackager, Arc<ScriptedRunner>) {
        let runner = Arc::new(runner);
        (YarnPackager::new(runner.clone()), runner)
    }

    const LIST_OUTPUT: &str = r#"{"type":"tree","data":{"type":"list","trees":[{"name":"@scope/util@1.2.0","children":[]},{"name":"lodash@4.17.21","children":[]}]}}"#;

    #[test]
    fn static_capabilities() {
        let (yarn, _) = packager(ScriptedRunner::new());
        assert_eq!(yarn.id(), "yarn");
        assert_eq!(yarn.lockfile_name(), "yarn.lock");
        assert_eq!(yarn.copy_package_section_names(), &["resolutions"]);
        assert!(!yarn.must_copy_modules());
    }

    #[test]
    fn version_uses_short_flag() {
        let (yarn, runner) = packager(ScriptedRunner::new().respond(CommandOutput::ok("1.22.19\n")));
        assert_eq!(yarn.version(Path::new("/svc")).unwrap().raw, "1.22.19");
        assert_eq!(runner.invocations()[0].args, vec!["-v"]);
    }

    #[test]
    fn production_dependencies_converts_tree() {
        let (yarn, runner) = packager(ScriptedRunner::new().respond(CommandOutput::ok(LIST_OUTPUT)));

        let tree = yarn.production_dependencies(Path::new("/svc"), 1).unwrap();

        assert_eq!(tree.version_of("@scope/util"), Some("1.2.0"));
        assert_eq!(tree.version_of("lodash"), Some("4.17.21"));
        assert_eq!(
            runner.invocations()[0].args,
            vec!["list", "--depth=1", "--json", "--production"]
        );
    }

    #[test]
    fn production_dependencies_tolerates_warnings() {
        let (yarn, _) = packager(ScriptedRunner::new().respond(CommandOutput::failed(
            1,
            LIST_OUTPUT,
            "warning package.json: No license field\n",
        )));
        assert!(yarn.production_dependencies(Path::new("/svc"), 1).is_ok());
    }

    #[test]
    fn production_dependencies_rejects_errors() {
        let (yarn, _) = packager(ScriptedRunner::new().respond(CommandOutput::failed(
            1,
            "",
            "error Couldn't find package.json\n",
        )));
        let err = yarn.production_dependencies(Path::new("/svc"), 1).unwrap_err();
        assert!(matches!(err, PackagingError::PackagerOperation { .. }));
    }

    #[test]
    fn production_dependencies_rejects_malformed_output() {
        let (yarn, _) = packager(ScriptedRunner::new().respond(CommandOutput::ok("garbage")));
        let err = yarn.production_dependencies(Path::new("/svc"), 1).unwrap_err();
        assert!(err.to_string().contains("malformed yarn list output"));
    }

    #[test]
    fn install_and_prune_share_arguments() {
        let (yarn, runner) = packager(ScriptedRunner::new());
        let options = PackagerOptions {
            ignore_scripts: true,
        };
        yarn.install(Path::new("/svc"), &options).unwrap();
        yarn.prune(Path::new("/svc"), &options).unwrap();

        let args: Vec<Vec<String>> = runner.invocations().into_iter().map(|i| i.args).collect();
        let expected = vec![
            "install".to_string(),
            "--frozen-lockfile".to_string(),
            "--non-interactive".to_string(),
            "--ignore-scripts".to_string(),
        ];
        assert_eq!(args, vec![expected.clone(), expected]);
    }

    #[test]
    fn run_scripts_invokes_yarn_run() {
        let (yarn, runner) = packager(ScriptedRunner::new());
        yarn.run_scripts(Path::new("/svc"), &["build".into()]).unwrap();
        assert_eq!(runner.invocations()[0].args, vec!["run", "build"]);
    }

    #[test]
    fn rebase_lockfile_rewrites_text_references() {
        let (yarn, _) = packager(ScriptedRunner::new());
        let lockfile = Lockfile::Text("\"lib@file:../lib\":\n  version \"1.0.0\"\n".into());

        let Lockfile::Text(text) = yarn.rebase_lockfile("../..", lockfile) else {
            panic!("expected text lockfile");
        };
        assert!(text.contains("\"lib@file:../../../lib\":"));
    }
}
