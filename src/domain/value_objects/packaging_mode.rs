//! Packaging mode value object - how many artifacts a run produces
//!
//! - `Individual`: one artifact per function
//! - `Unified`: one artifact shared by every function of the service

use serde::{Deserialize, Serialize};

/// Packaging mode, determined once per run from `package.individually`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PackagingMode {
    /// One artifact per function
    Individual,
    /// One artifact for the whole service
    #[default]
    Unified,
}

impl PackagingMode {
    /// Derive the mode from the service's `package.individually` flag
    pub fn from_individually(individually: bool) -> Self {
        if individually {
            PackagingMode::Individual
        } else {
            PackagingMode::Unified
        }
    }

    pub fn is_individual(&self) -> bool {
        matches!(self, PackagingMode::Individual)
    }

    /// Archive identity a function is bound to under this mode
    pub fn archive_identity<'a>(&self, function_name: &'a str, service_name: &'a str) -> &'a str {
        match self {
            PackagingMode::Individual => function_name,
            PackagingMode::Unified => service_name,
        }
    }

    /// Archive identities produced under this mode
    pub fn archive_identities(&self, function_names: &[String], service_name: &str) -> Vec<String> {
        match self {
            PackagingMode::Individual => function_names.to_vec(),
            PackagingMode::Unified => vec![service_name.to_string()],
        }
    }
}

impl std::fmt::Display for PackagingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackagingMode::Individual => write!(f, "individual"),
            PackagingMode::Unified => write!(f, "unified"),
        }
    }
}
