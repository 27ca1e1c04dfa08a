//! Production dependency tree, in the npm `ls --json` shape
//!
//! yarn output is converted into this shape so callers never branch on the
//! packager that produced it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyTree {
    #[serde(default)]
    pub problems: Vec<String>,

    #[serde(default)]
    pub dependencies: BTreeMap<String, DependencyNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<String, DependencyNode>,
}

impl DependencyTree {
    /// True if `name` is a first-level dependency
    pub fn contains(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
    }

    /// Version of a first-level dependency, if resolved
    pub fn version_of(&self, name: &str) -> Option<&str> {
        self.dependencies
            .get(name)
            .and_then(|node| node.version.as_deref())
    }
}
