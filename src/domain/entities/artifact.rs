//! Artifact entity - a single archive and its two path roles
//!
//! - build-stage path: `<build-output-root>/<identity>.zip`
//! - deploy-stage path: `.serverless/<identity>.zip` relative to the project root

use std::path::{Path, PathBuf};

/// Suffix appended to every archive identity
pub const ARCHIVE_SUFFIX: &str = ".zip";

/// Canonical deploy staging directory, relative to the project root
pub const DEPLOY_STAGING_DIR: &str = ".serverless";

/// File name of an archive for the given identity
pub fn archive_file_name(identity: &str) -> String {
    format!("{}{}", identity, ARCHIVE_SUFFIX)
}

/// Directory layout that decides where artifacts live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    project_root: PathBuf,
    build_output_root: PathBuf,
}

impl ArtifactLayout {
    /// `build_output_root` is resolved against `project_root` when relative.
    pub fn new(project_root: impl Into<PathBuf>, build_output_root: impl AsRef<Path>) -> Self {
        let project_root = project_root.into();
        let build_output_root = if build_output_root.as_ref().is_absolute() {
            build_output_root.as_ref().to_path_buf()
        } else {
            project_root.join(build_output_root)
        };
        Self {
            project_root,
            build_output_root,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn build_output_root(&self) -> &Path {
        &self.build_output_root
    }

    /// Absolute deploy staging directory
    pub fn deploy_dir(&self) -> PathBuf {
        self.project_root.join(DEPLOY_STAGING_DIR)
    }

    /// Locate the artifact for an identity (function or service name)
    pub fn locate(&self, identity: &str) -> Artifact {
        let file_name = archive_file_name(identity);
        Artifact {
            identity: identity.to_string(),
            build_path: self.build_output_root.join(&file_name),
            deploy_path: self.deploy_dir().join(&file_name),
            deploy_ref: format!("{}/{}", DEPLOY_STAGING_DIR, file_name),
        }
    }
}

/// A single archive file identified by its logical owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    identity: String,
    build_path: PathBuf,
    deploy_path: PathBuf,
    deploy_ref: String,
}

impl Artifact {
    /// Function or service name owning this archive
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Location in the build tool's output directory
    pub fn build_path(&self) -> &Path {
        &self.build_path
    }

    /// Absolute location in the deploy staging directory
    pub fn deploy_path(&self) -> &Path {
        &self.deploy_path
    }

    /// Deploy-stage path as recorded on function records (`/`-separated, relative)
    pub fn deploy_ref(&self) -> &str {
        &self.deploy_ref
    }
}
