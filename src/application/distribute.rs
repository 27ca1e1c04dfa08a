//! Artifact distribution
//!
//! Copies finished archives from the build output into the deploy staging
//! directory, then records the deploy-stage path on every function (and,
//! for providers that need it, on the service).
//!
//! The copy pass and the assignment pass are separate: a run that rebuilt
//! only some functions still assigns every function, reusing archives left
//! by an earlier full run.

use std::sync::Arc;

use crate::domain::entities::{ArtifactLayout, FunctionArtifactBinding};
use crate::domain::ports::{HostRegistry, Logger};
use crate::domain::services::ArtifactAssignment;
use crate::domain::value_objects::{PackagingMode, ServiceArtifactPolicy};
use crate::error::{PackResult, PackagingError};
use crate::infrastructure::fs::copy_artifact;

pub struct ArtifactDistributor {
    layout: ArtifactLayout,
    policy: ServiceArtifactPolicy,
    logger: Arc<dyn Logger>,
}

impl ArtifactDistributor {
    pub fn new(layout: ArtifactLayout, logger: Arc<dyn Logger>) -> Self {
        Self {
            layout,
            policy: ServiceArtifactPolicy::default(),
            logger,
        }
    }

    pub fn with_policy(mut self, policy: ServiceArtifactPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn layout(&self) -> &ArtifactLayout {
        &self.layout
    }

    /// Copy and assign artifacts for `mode`.
    ///
    /// `selected` limits the copy pass to those functions in individual
    /// mode; `None` copies every function's archive.
    pub fn distribute<H>(
        &self,
        host: &mut H,
        mode: PackagingMode,
        selected: Option<&[String]>,
    ) -> PackResult<FunctionArtifactBinding>
    where
        H: HostRegistry + ?Sized,
    {
        let assignment = ArtifactAssignment::for_host_version(host.host_version())?;
        let service = host.service_name().to_string();
        let functions = host.function_names();

        let copy_names = selected.unwrap_or(functions.as_slice());
        for identity in mode.archive_identities(copy_names, &service) {
            let artifact = self.layout.locate(&identity);
            self.logger.verbose(&format!(
                "Copying {} to {}",
                artifact.build_path().display(),
                artifact.deploy_ref()
            ));
            copy_artifact(artifact.build_path(), artifact.deploy_path())?;
        }

        let mut binding = FunctionArtifactBinding::new();
        for name in &functions {
            let identity = mode.archive_identity(name, &service);
            let artifact = self.layout.locate(identity);
            let record = host
                .function_mut(name)
                .ok_or_else(|| PackagingError::UnknownFunction { name: name.clone() })?;
            assignment.assign(name, record, artifact.deploy_ref(), self.logger.as_ref());
            binding.bind(name.as_str(), artifact.deploy_ref());
        }

        if !mode.is_individual() && self.policy.requires_service_artifact(host.provider_name()) {
            let artifact = self.layout.locate(&service);
            host.set_service_artifact(artifact.deploy_ref());
            binding.bind_service(artifact.deploy_ref());
        }

        Ok(binding)
    }
}
