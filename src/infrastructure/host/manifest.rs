//! Service manifest
//!
//! In-memory host registry built from configuration. After packaging it is
//! written to `.serverless/fnpack-manifest.json` so deploy tooling can read
//! the recorded artifact bindings.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::domain::entities::{FunctionRecord, DEPLOY_STAGING_DIR};
use crate::domain::ports::HostRegistry;
use crate::error::{PackResult, PackagingError};

/// File name of the persisted manifest inside the deploy staging directory
pub const MANIFEST_FILE_NAME: &str = "fnpack-manifest.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceManifest {
    service: String,
    provider: String,
    host_version: String,
    #[serde(default)]
    individually: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    service_artifact: Option<String>,
    #[serde(default)]
    functions: BTreeMap<String, FunctionRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generated_at: Option<DateTime<Utc>>,
}

impl ServiceManifest {
    pub fn new(
        service: impl Into<String>,
        provider: impl Into<String>,
        host_version: impl Into<String>,
        individually: bool,
    ) -> Self {
        Self {
            service: service.into(),
            provider: provider.into(),
            host_version: host_version.into(),
            individually,
            service_artifact: None,
            functions: BTreeMap::new(),
            generated_at: None,
        }
    }

    pub fn with_function(mut self, name: impl Into<String>, record: FunctionRecord) -> Self {
        self.functions.insert(name.into(), record);
        self
    }

    pub fn functions(&self) -> &BTreeMap<String, FunctionRecord> {
        &self.functions
    }

    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.generated_at
    }

    /// Conventional manifest location under a project root
    pub fn default_path(project_root: &Path) -> std::path::PathBuf {
        project_root.join(DEPLOY_STAGING_DIR).join(MANIFEST_FILE_NAME)
    }

    /// Stamp `generated_at` and write the manifest as pretty JSON.
    pub fn save(&mut self, path: &Path) -> PackResult<()> {
        self.generated_at = Some(Utc::now());
        let manifest_err = |message: String| PackagingError::Manifest {
            path: path.to_path_buf(),
            message,
        };

        let content =
            serde_json::to_string_pretty(self).map_err(|e| manifest_err(e.to_string()))?;
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|e| manifest_err(e.to_string()))?;

        let mut temp = NamedTempFile::new_in(parent).map_err(|e| manifest_err(e.to_string()))?;
        temp.write_all(content.as_bytes())
            .and_then(|_| temp.write_all(b"\n"))
            .map_err(|e| manifest_err(e.to_string()))?;
        temp.persist(path)
            .map_err(|e| manifest_err(e.error.to_string()))?;
        Ok(())
    }

    pub fn load(path: &Path) -> PackResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| PackagingError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| PackagingError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl HostRegistry for ServiceManifest {
    fn host_version(&self) -> &str {
        &self.host_version
    }

    fn service_name(&self) -> &str {
        &self.service
    }

    fn provider_name(&self) -> &str {
        &self.provider
    }

    fn package_individually(&self) -> bool {
        self.individually
    }

    fn function_names(&self) -> Vec<String> {
        self.functions.keys().cloned().collect()
    }

    fn function(&self, name: &str) -> Option<&FunctionRecord> {
        self.functions.get(name)
    }

    fn function_mut(&mut self, name: &str) -> Option<&mut FunctionRecord> {
        self.functions.get_mut(name)
    }

    fn service_artifact(&self) -> Option<&str> {
        self.service_artifact.as_deref()
    }

    fn set_service_artifact(&mut self, path: &str) {
        self.service_artifact = Some(path.to_string());
    }
}
