//! Domain Value Objects

mod exclude_pattern;
mod packaging_mode;
mod service_artifact_policy;

pub use exclude_pattern::ExcludePattern;
pub use packaging_mode::PackagingMode;
pub use service_artifact_policy::{ServiceArtifactPolicy, SERVICE_ARTIFACT_PROVIDERS};
