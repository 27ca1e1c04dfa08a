//! Test environment builder for isolated fnpack testing.
//!
//! Provides `TestEnv` - a temp project directory with compiled output and
//! configuration, plus helpers to run the fnpack CLI against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into a test run
const SCRUBBED_ENV: &[&str] = &[
    "FNPACK_PACKAGER",
    "FNPACK_HOST_VERSION",
    "FNPACK_CONCURRENCY",
    "FNPACK_VERBOSITY",
    "FNPACK_LOG_FORMAT",
    "RUST_LOG",
];

/// Result of running an fnpack CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

/// Isolated project with its own user config location
pub struct TestEnv {
    pub project_root: TempDir,
    /// Holds the (absent by default) user config file
    pub config_home: TempDir,
    fnpack_bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Path the user config is read from
    pub fn user_config_path(&self) -> PathBuf {
        self.config_home.path().join("config.toml")
    }

    /// Run fnpack in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run fnpack from project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.fnpack_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("FNPACK_USER_CONFIG", self.user_config_path());
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute fnpack");
        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    /// Read the manifest written by `fnpack package`
    pub fn read_manifest(&self) -> serde_json::Value {
        let path = self.project_path(".serverless/fnpack-manifest.json");
        let content = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read manifest {}: {}", path.display(), e));
        serde_json::from_str(&content).expect("manifest is valid JSON")
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    config: Option<String>,
    user_config: Option<String>,
    outputs: Vec<(String, Vec<(String, String)>)>,
    build_output: String,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            user_config: None,
            outputs: Vec::new(),
            build_output: ".webpack".to_string(),
        }
    }

    /// Set `fnpack.toml` content
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config = Some(toml.to_string());
        self
    }

    /// Set user config content
    pub fn with_user_config(mut self, toml: &str) -> Self {
        self.user_config = Some(toml.to_string());
        self
    }

    /// Compiled output directory (relative to the project) the files go into
    pub fn with_build_output(mut self, dir: &str) -> Self {
        self.build_output = dir.to_string();
        self
    }

    /// Add compiled output for a unit (`<build_output>/<unit>/...`)
    pub fn with_output(mut self, unit: &str, files: &[(&str, &str)]) -> Self {
        self.outputs.push((
            unit.to_string(),
            files
                .iter()
                .map(|(p, c)| (p.to_string(), c.to_string()))
                .collect(),
        ));
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create project dir");
        let config_home = TempDir::new().expect("Failed to create config dir");

        if let Some(config) = &self.config {
            write_file(&project_root.path().join("fnpack.toml"), config);
        }
        if let Some(config) = &self.user_config {
            write_file(&config_home.path().join("config.toml"), config);
        }
        for (unit, files) in &self.outputs {
            let unit_dir = project_root.path().join(&self.build_output).join(unit);
            std::fs::create_dir_all(&unit_dir).expect("Failed to create output dir");
            for (path, content) in files {
                write_file(&unit_dir.join(path), content);
            }
        }

        TestEnv {
            project_root,
            config_home,
            fnpack_bin: PathBuf::from(env!("CARGO_BIN_EXE_fnpack")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
