//! Dependency Use Case
//!
//! Installs the service's external modules once into a composite directory
//! and then gives every compiled output its own production `node_modules`:
//! 1. Write a `package.json` listing only the included modules
//! 2. Copy the service lockfile, rebased to the composite directory
//! 3. Install and inspect the production dependency tree
//! 4. Per unit: copy manifest and lockfile (and modules), prune, run scripts

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::domain::entities::{ArtifactLayout, Lockfile, PackagingUnit};
use crate::domain::ports::{BuildOutputs, HostRegistry, Logger, Packager, PackagerOptions};
use crate::domain::value_objects::PackagingMode;
use crate::error::{PackResult, PackagingError};
use crate::infrastructure::fs::copy_dir_all;

/// Composite install directory name inside the build output root
pub const COMPOSITE_DIR: &str = "dependencies";

const PACKAGE_JSON: &str = "package.json";

#[derive(Debug, Clone)]
pub struct DependencyOptions {
    pub project_root: PathBuf,
    pub build_output: PathBuf,
    /// Modules to install into every unit
    pub include_modules: Vec<String>,
    /// Package scripts run in each unit after pruning
    pub scripts: Vec<String>,
    pub ignore_scripts: bool,
    /// Depth passed to the production dependency listing
    pub depth: u32,
}

impl DependencyOptions {
    pub fn new(project_root: impl Into<PathBuf>, build_output: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            build_output: build_output.into(),
            include_modules: Vec::new(),
            scripts: Vec::new(),
            ignore_scripts: false,
            depth: 1,
        }
    }

    pub fn with_modules(mut self, modules: Vec<String>) -> Self {
        self.include_modules = modules;
        self
    }

    pub fn with_scripts(mut self, scripts: Vec<String>) -> Self {
        self.scripts = scripts;
        self
    }

    pub fn with_ignore_scripts(mut self, ignore: bool) -> Self {
        self.ignore_scripts = ignore;
        self
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }
}

/// Outcome of dependency packaging
#[derive(Debug, Clone, Default, Serialize)]
pub struct DependencyReport {
    pub packager: String,
    pub packager_version: String,
    /// Included module → requested version
    pub modules: BTreeMap<String, String>,
    /// Unit directories that received the modules
    pub units: Vec<PathBuf>,
}

pub struct DependencyUseCase<B>
where
    B: BuildOutputs,
{
    outputs: B,
    logger: Arc<dyn Logger>,
}

impl<B> DependencyUseCase<B>
where
    B: BuildOutputs,
{
    pub fn new(outputs: B, logger: Arc<dyn Logger>) -> Self {
        Self { outputs, logger }
    }

    pub fn execute<H>(
        &self,
        host: &H,
        packager: &dyn Packager,
        options: &DependencyOptions,
    ) -> PackResult<DependencyReport>
    where
        H: HostRegistry + ?Sized,
    {
        if options.include_modules.is_empty() {
            self.logger.verbose("No external modules to package");
            return Ok(DependencyReport::default());
        }

        let version = packager.version(&options.project_root)?;
        self.logger
            .verbose(&format!("Using {} {}", packager.id(), version));

        let layout = ArtifactLayout::new(&options.project_root, &options.build_output);
        let composite = layout.build_output_root().join(COMPOSITE_DIR);
        fs::create_dir_all(&composite)?;

        let service_manifest = read_package_json(&options.project_root.join(PACKAGE_JSON))?;
        let modules = self.resolve_versions(&service_manifest, &options.include_modules);
        let composite_manifest =
            composite_package_json(host.service_name(), &modules, &service_manifest, packager);
        write_json(&composite.join(PACKAGE_JSON), &composite_manifest)?;

        self.copy_rebased_lockfile(packager, &options.project_root, &composite)?;

        let packager_options = PackagerOptions {
            ignore_scripts: options.ignore_scripts,
        };
        packager.install(&composite, &packager_options)?;
        let tree = packager.production_dependencies(&composite, options.depth)?;
        for problem in &tree.problems {
            self.logger.verbose(&format!("Dependency problem: {}", problem));
        }
        for name in modules.keys().filter(|name| !tree.contains(name)) {
            self.logger
                .verbose(&format!("{} is not a production dependency", name));
        }

        let mut units = Vec::new();
        for unit in units_for(host) {
            let dir = self.outputs.compile_result(&unit).output_path().to_path_buf();
            self.install_into_unit(packager, &composite, &dir, &packager_options, options)?;
            units.push(dir);
        }

        Ok(DependencyReport {
            packager: packager.id().to_string(),
            packager_version: version.to_string(),
            modules,
            units,
        })
    }

    fn resolve_versions(&self, manifest: &Value, modules: &[String]) -> BTreeMap<String, String> {
        modules
            .iter()
            .map(|name| {
                let version = ["dependencies", "devDependencies"]
                    .iter()
                    .find_map(|section| manifest[*section][name.as_str()].as_str())
                    .map(str::to_string)
                    .unwrap_or_else(|| {
                        self.logger.verbose(&format!(
                            "{} is not listed in package.json, using '*'",
                            name
                        ));
                        "*".to_string()
                    });
                (name.clone(), version)
            })
            .collect()
    }

    fn copy_rebased_lockfile(
        &self,
        packager: &dyn Packager,
        service_root: &Path,
        composite: &Path,
    ) -> PackResult<()> {
        let source = service_root.join(packager.lockfile_name());
        if !source.is_file() {
            return Ok(());
        }
        let content = fs::read_to_string(&source)?;
        let lockfile = Lockfile::parse(packager.lockfile_format(), &content).map_err(|e| {
            PackagingError::Manifest {
                path: source.clone(),
                message: e.to_string(),
            }
        })?;
        let rebased = packager.rebase_lockfile(&path_to_root(composite, service_root), lockfile);
        fs::write(composite.join(packager.lockfile_name()), rebased.to_content())?;
        self.logger
            .verbose(&format!("Copied {} into {}", packager.lockfile_name(), composite.display()));
        Ok(())
    }

    fn install_into_unit(
        &self,
        packager: &dyn Packager,
        composite: &Path,
        unit_dir: &Path,
        packager_options: &PackagerOptions,
        options: &DependencyOptions,
    ) -> PackResult<()> {
        if !unit_dir.is_dir() {
            return Err(PackagingError::DirectoryNotFound {
                path: unit_dir.to_path_buf(),
            });
        }
        fs::copy(composite.join(PACKAGE_JSON), unit_dir.join(PACKAGE_JSON))?;
        let lockfile = composite.join(packager.lockfile_name());
        if lockfile.is_file() {
            fs::copy(&lockfile, unit_dir.join(packager.lockfile_name()))?;
        }
        if packager.must_copy_modules() {
            copy_dir_all(&composite.join("node_modules"), &unit_dir.join("node_modules"))?;
        }
        packager.prune(unit_dir, packager_options)?;
        packager.run_scripts(unit_dir, &options.scripts)?;
        self.logger
            .verbose(&format!("Installed modules into {}", unit_dir.display()));
        Ok(())
    }
}

fn units_for<H>(host: &H) -> Vec<PackagingUnit>
where
    H: HostRegistry + ?Sized,
{
    match PackagingMode::from_individually(host.package_individually()) {
        PackagingMode::Individual => host
            .function_names()
            .into_iter()
            .map(PackagingUnit::Function)
            .collect(),
        PackagingMode::Unified => vec![PackagingUnit::Service(host.service_name().to_string())],
    }
}

fn read_package_json(path: &Path) -> PackResult<Value> {
    let content = fs::read_to_string(path).map_err(|e| PackagingError::Manifest {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| PackagingError::Manifest {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn write_json(path: &Path, value: &Value) -> PackResult<()> {
    let content = serde_json::to_string_pretty(value).map_err(|e| PackagingError::Manifest {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    fs::write(path, content + "\n")?;
    Ok(())
}

fn composite_package_json(
    service: &str,
    modules: &BTreeMap<String, String>,
    service_manifest: &Value,
    packager: &dyn Packager,
) -> Value {
    let dependencies: Map<String, Value> = modules
        .iter()
        .map(|(name, version)| (name.clone(), Value::String(version.clone())))
        .collect();
    let mut manifest = json!({
        "name": service,
        "version": "1.0.0",
        "description": format!("Packaged externals for {}", service),
        "private": true,
        "dependencies": dependencies,
    });
    for section in packager.copy_package_section_names() {
        if let Some(value) = service_manifest.get(*section) {
            manifest[*section] = value.clone();
        }
    }
    manifest
}

/// Relative path from `from` back to `root`, `/`-separated.
///
/// Falls back to the absolute root when `from` is not beneath it.
fn path_to_root(from: &Path, root: &Path) -> String {
    match from.strip_prefix(root) {
        Ok(rel) => {
            let depth = rel
                .components()
                .filter(|c| matches!(c, Component::Normal(_)))
                .count();
            if depth == 0 {
                ".".to_string()
            } else {
                vec![".."; depth].join("/")
            }
        }
        Err(_) => root.to_string_lossy().replace('\\', "/"),
    }
}
