//! Function record entity
//!
//! The host's view of a single function. Packaging writes the artifact
//! binding into it in one of two historical shapes:
//!
//! - flat: `artifact = "<path>"` plus `package.disable = true`
//! - nested: `package = { artifact = "<path>" }`

use serde::{Deserialize, Serialize};

/// Per-function package settings as understood by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

/// A function known to the host registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,

    /// Flat artifact path (hosts below the nested-descriptor version)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<PackageSettings>,
}

impl FunctionRecord {
    pub fn with_handler(handler: impl Into<String>) -> Self {
        Self {
            handler: Some(handler.into()),
            ..Self::default()
        }
    }

    /// Artifact path regardless of which shape recorded it
    pub fn artifact_path(&self) -> Option<&str> {
        self.artifact
            .as_deref()
            .or_else(|| self.package.as_ref().and_then(|p| p.artifact.as_deref()))
    }

    /// True when default host packaging is disabled for this function
    pub fn packaging_disabled(&self) -> bool {
        self.package
            .as_ref()
            .and_then(|p| p.disable)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_path_reads_flat_shape() {
        let record = FunctionRecord {
            artifact: Some(".serverless/f1.zip".into()),
            package: Some(PackageSettings {
                disable: Some(true),
                ..PackageSettings::default()
            }),
            ..FunctionRecord::default()
        };
        assert_eq!(record.artifact_path(), Some(".serverless/f1.zip"));
        assert!(record.packaging_disabled());
    }

    #[test]
    fn artifact_path_reads_nested_shape() {
        let record = FunctionRecord {
            package: Some(PackageSettings {
                artifact: Some(".serverless/svc.zip".into()),
                ..PackageSettings::default()
            }),
            ..FunctionRecord::default()
        };
        assert_eq!(record.artifact_path(), Some(".serverless/svc.zip"));
        assert!(!record.packaging_disabled());
    }

    #[test]
    fn empty_record_has_no_artifact() {
        assert_eq!(FunctionRecord::with_handler("a.handler").artifact_path(), None);
    }
}
