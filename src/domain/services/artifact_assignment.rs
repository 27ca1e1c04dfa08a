//! Artifact assignment strategy
//!
//! Hosts record a function's artifact in one of two shapes depending on
//! their version. The strategy is chosen once per run and then applied to
//! every function record.

use semver::Version;

use crate::domain::entities::{FunctionRecord, PackageSettings};
use crate::domain::ports::Logger;
use crate::error::{PackResult, PackagingError};

/// First host version that reads the nested `package.artifact` descriptor
pub const NESTED_ARTIFACT_MIN_VERSION: Version = Version::new(1, 18, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactAssignment {
    /// `artifact = path` plus `package.disable = true`
    Legacy,
    /// `package = { artifact = path }`
    Nested,
}

impl ArtifactAssignment {
    /// Select the strategy from the host's reported version
    pub fn for_host_version(raw: &str) -> PackResult<Self> {
        let version = parse_host_version(raw).ok_or_else(|| PackagingError::InvalidHostVersion {
            version: raw.to_string(),
        })?;
        if version < NESTED_ARTIFACT_MIN_VERSION {
            Ok(ArtifactAssignment::Legacy)
        } else {
            Ok(ArtifactAssignment::Nested)
        }
    }

    /// Write `path` into `record` using this shape
    pub fn assign(
        &self,
        function_name: &str,
        record: &mut FunctionRecord,
        path: &str,
        logger: &dyn Logger,
    ) {
        match self {
            ArtifactAssignment::Legacy => {
                record.artifact = Some(path.to_string());
                let mut package = record.package.take().unwrap_or_default();
                package.disable = Some(true);
                record.package = Some(package);
                logger.info(&format!(
                    "{} is packaged by fnpack. Default packaging is overridden.",
                    function_name
                ));
            }
            ArtifactAssignment::Nested => {
                record.artifact = None;
                record.package = Some(PackageSettings {
                    artifact: Some(path.to_string()),
                    ..PackageSettings::default()
                });
            }
        }
    }
}

/// Parse a host version, padding `1` / `1.17` style strings to full semver.
fn parse_host_version(raw: &str) -> Option<Version> {
    let trimmed = raw.trim().trim_start_matches('v');
    if let Ok(version) = Version::parse(trimmed) {
        return Some(version);
    }
    let padded = match trimmed.split('.').count() {
        1 => format!("{}.0.0", trimmed),
        2 => format!("{}.0", trimmed),
        _ => return None,
    };
    Version::parse(&padded).ok()
}
