//! Configuration types for fnpack

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::package::{default_concurrency, DEFAULT_BUILD_OUTPUT};
use crate::application::{DependencyOptions, PackageOptions};
use crate::domain::entities::FunctionRecord;
use crate::domain::value_objects::ExcludePattern;
use crate::error::{PackResult, PackagingError};
use crate::infrastructure::fs::DEFAULT_COMPRESSION_LEVEL;
use crate::infrastructure::host::ServiceManifest;

/// Host version assumed when none is configured
pub const DEFAULT_HOST_VERSION: &str = "3.0.0";

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name; defaults to the project directory name
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default = "default_provider")]
    pub provider: String,

    /// Version of the host framework that reads the bindings
    #[serde(default = "default_host_version")]
    pub host_version: String,

    /// `package.individually`
    #[serde(default)]
    pub individually: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: None,
            provider: default_provider(),
            host_version: default_host_version(),
            individually: false,
        }
    }
}

/// Packaging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackagingConfig {
    #[serde(default = "default_packager")]
    pub packager: String,

    #[serde(default = "default_build_output")]
    pub build_output: PathBuf,

    /// Regex matched against relative paths; matches are left out of archives
    #[serde(default)]
    pub exclude: Option<String>,

    /// Concurrent archive builds; defaults to available parallelism
    #[serde(default)]
    pub concurrency: Option<usize>,

    #[serde(default = "default_compression_level")]
    pub compression_level: i32,

    /// External modules installed into every compiled output
    #[serde(default)]
    pub include_modules: Vec<String>,

    /// Package scripts run after installing modules
    #[serde(default)]
    pub scripts: Vec<String>,

    #[serde(default)]
    pub ignore_scripts: bool,

    #[serde(default = "default_dependency_depth")]
    pub dependency_depth: u32,
}

impl Default for PackagingConfig {
    fn default() -> Self {
        Self {
            packager: default_packager(),
            build_output: default_build_output(),
            exclude: None,
            concurrency: None,
            compression_level: default_compression_level(),
            include_modules: Vec::new(),
            scripts: Vec::new(),
            ignore_scripts: false,
            dependency_depth: default_dependency_depth(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub log_format: LogFormat,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Which logger receives packaging messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Plain `fnpack: ...` lines on stderr
    #[default]
    Console,
    /// Structured `tracing` events (filter with RUST_LOG)
    Tracing,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub functions: BTreeMap<String, FunctionRecord>,

    #[serde(default)]
    pub packaging: PackagingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PackResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| PackagingError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Configured service name, or the project directory name
    pub fn service_name(&self, project_root: &Path) -> String {
        self.service.name.clone().unwrap_or_else(|| {
            project_root
                .canonicalize()
                .ok()
                .as_deref()
                .unwrap_or(project_root)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "service".to_string())
        })
    }

    /// Host registry view of the configured service
    pub fn to_manifest(&self, project_root: &Path) -> ServiceManifest {
        self.functions.iter().fold(
            ServiceManifest::new(
                self.service_name(project_root),
                &self.service.provider,
                &self.service.host_version,
                self.service.individually,
            ),
            |manifest, (name, record)| manifest.with_function(name, record.clone()),
        )
    }

    pub fn exclude_pattern(&self) -> PackResult<Option<ExcludePattern>> {
        ExcludePattern::from_option(self.packaging.exclude.as_deref())
    }

    pub fn concurrency(&self) -> usize {
        self.packaging
            .concurrency
            .unwrap_or_else(default_concurrency)
            .max(1)
    }

    pub fn package_options(&self, project_root: &Path) -> PackResult<PackageOptions> {
        Ok(PackageOptions::new(project_root)
            .with_build_output(&self.packaging.build_output)
            .with_exclude(self.exclude_pattern()?)
            .with_concurrency(self.concurrency())
            .with_compression_level(self.packaging.compression_level))
    }

    pub fn dependency_options(&self, project_root: &Path) -> DependencyOptions {
        DependencyOptions::new(project_root, &self.packaging.build_output)
            .with_modules(self.packaging.include_modules.clone())
            .with_scripts(self.packaging.scripts.clone())
            .with_ignore_scripts(self.packaging.ignore_scripts)
            .with_depth(self.packaging.dependency_depth)
    }
}

fn default_provider() -> String {
    "aws".to_string()
}

fn default_host_version() -> String {
    DEFAULT_HOST_VERSION.to_string()
}

fn default_packager() -> String {
    "npm".to_string()
}

fn default_build_output() -> PathBuf {
    PathBuf::from(DEFAULT_BUILD_OUTPUT)
}

fn default_compression_level() -> i32 {
    DEFAULT_COMPRESSION_LEVEL
}

fn default_dependency_depth() -> u32 {
    1
}
