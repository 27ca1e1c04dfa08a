//! Service artifact policy - providers that need a service-level artifact
//!
//! Some cloud-function providers read a single service-wide artifact
//! descriptor instead of the per-function ones. In unified mode those
//! providers additionally get the shared archive path on the service record.

/// Providers that require a service-level artifact binding in unified mode
pub const SERVICE_ARTIFACT_PROVIDERS: &[&str] = &["google"];

/// Policy table keyed by provider identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceArtifactPolicy {
    providers: Vec<String>,
}

impl Default for ServiceArtifactPolicy {
    fn default() -> Self {
        Self::new(SERVICE_ARTIFACT_PROVIDERS.iter().map(|p| p.to_string()))
    }
}

impl ServiceArtifactPolicy {
    pub fn new(providers: impl IntoIterator<Item = String>) -> Self {
        Self {
            providers: providers.into_iter().collect(),
        }
    }

    /// Whether `provider` expects a service-level artifact binding
    pub fn requires_service_artifact(&self, provider: &str) -> bool {
        self.providers.iter().any(|p| p == provider)
    }
}
