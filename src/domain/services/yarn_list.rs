//! Conversion of `yarn list --json` output into a `DependencyTree`

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::entities::{DependencyNode, DependencyTree};

#[derive(Deserialize)]
struct YarnMessage {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Option<YarnTreeData>,
}

#[derive(Deserialize)]
struct YarnTreeData {
    #[serde(default)]
    trees: Vec<YarnTree>,
}

#[derive(Deserialize)]
struct YarnTree {
    name: String,
    #[serde(default)]
    children: Vec<YarnTree>,
}

/// Error raised when no `tree` message can be found in the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YarnListError(pub String);

impl std::fmt::Display for YarnListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed yarn list output: {}", self.0)
    }
}

impl std::error::Error for YarnListError {}

/// Parse yarn's line-delimited JSON output and convert the `tree` message.
pub fn parse_yarn_list(stdout: &str) -> Result<DependencyTree, YarnListError> {
    let mut last_error = String::from("no tree message");
    for line in stdout.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match serde_json::from_str::<YarnMessage>(line) {
            Ok(message) if message.kind == "tree" => {
                let trees = message.data.map(|d| d.trees).unwrap_or_default();
                return Ok(DependencyTree {
                    problems: Vec::new(),
                    dependencies: convert_trees(&trees),
                });
            }
            Ok(_) => {}
            Err(e) => last_error = e.to_string(),
        }
    }
    Err(YarnListError(last_error))
}

fn convert_trees(trees: &[YarnTree]) -> BTreeMap<String, DependencyNode> {
    trees
        .iter()
        .map(|tree| {
            let (name, version) = split_module_name(&tree.name);
            (
                name.to_string(),
                DependencyNode {
                    version: Some(version.to_string()),
                    dependencies: convert_trees(&tree.children),
                },
            )
        })
        .collect()
}

/// Split `name@version`, keeping the leading `@` of scoped packages.
pub fn split_module_name(spec: &str) -> (&str, &str) {
    let offset = usize::from(spec.starts_with('@'));
    match spec[offset..].find('@') {
        Some(idx) => (&spec[..offset + idx], &spec[offset + idx + 1..]),
        None => (spec, ""),
    }
}
