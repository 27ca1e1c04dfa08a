//! Lockfile rebasing
//!
//! A lockfile copied next to compiled output must still resolve relative
//! `file:` dependencies against the original package root. These functions
//! prefix such references with the path back to that root.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde_json::Value;

fn npm_file_reference() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^file:[^/]{2}").expect("static regex"))
}

fn yarn_file_reference() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"[^"/]@(?:file:)?((?:\./|\.\./).*?)[":,]"#).expect("static regex")
    })
}

/// Rebase a single npm version string (`file:../lib` → `file:<root>/../lib`).
///
/// Absolute references and `file:./` references are left untouched.
pub fn rebase_file_reference(path_to_package_root: &str, version: &str) -> String {
    if !npm_file_reference().is_match(version) {
        return version.to_string();
    }
    let file_path = &version["file:".len()..];
    format!("file:{}/{}", path_to_package_root, file_path).replace('\\', "/")
}

/// Rebase every `version` in an npm lockfile, recursing through `dependencies`.
pub fn rebase_npm_lockfile(path_to_package_root: &str, mut lockfile: Value) -> Value {
    rebase_npm_node(path_to_package_root, &mut lockfile);
    lockfile
}

fn rebase_npm_node(path_to_package_root: &str, node: &mut Value) {
    let Some(object) = node.as_object_mut() else {
        return;
    };
    if let Some(Value::String(version)) = object.get_mut("version") {
        *version = rebase_file_reference(path_to_package_root, version);
    }
    if let Some(Value::Object(dependencies)) = object.get_mut("dependencies") {
        for dependency in dependencies.values_mut() {
            rebase_npm_node(path_to_package_root, dependency);
        }
    }
}

/// Rebase every relative `@file:` / `@./` / `@../` reference in a yarn lockfile.
///
/// Each reference is rewritten in place exactly once.
pub fn rebase_yarn_lockfile(path_to_package_root: &str, lockfile: &str) -> String {
    yarn_file_reference()
        .replace_all(lockfile, |caps: &Captures<'_>| match (caps.get(0), caps.get(1)) {
            (Some(whole), Some(reference)) => {
                let text = whole.as_str();
                let start = reference.start() - whole.start();
                let end = reference.end() - whole.start();
                let rebased = format!("{}/{}", path_to_package_root, reference.as_str())
                    .replace('\\', "/");
                format!("{}{}{}", &text[..start], rebased, &text[end..])
            }
            _ => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn npm_parent_reference_is_rebased() {
        assert_eq!(
            rebase_file_reference("../../", "file:../lib"),
            "file:../..//../lib"
        );
        assert_eq!(
            rebase_file_reference("../..", "file:../lib"),
            "file:../../../lib"
        );
    }

    #[test]
    fn npm_non_file_versions_are_untouched() {
        assert_eq!(rebase_file_reference("../..", "1.2.3"), "1.2.3");
        assert_eq!(rebase_file_reference("../..", "file:/abs/lib"), "file:/abs/lib");
        assert_eq!(rebase_file_reference("../..", "file:./lib"), "file:./lib");
    }

    #[test]
    fn npm_backslashes_are_normalized() {
        assert_eq!(
            rebase_file_reference("..\\..", "file:..\\lib"),
            "file:../../../lib"
        );
    }

    #[test]
    fn npm_lockfile_is_rebased_recursively() {
        let lockfile = json!({
            "name": "svc",
            "version": "1.0.0",
            "lockfileVersion": 1,
            "dependencies": {
                "local-lib": {
                    "version": "file:../local-lib",
                    "dependencies": {
                        "nested": { "version": "file:../nested" }
                    }
                },
                "lodash": { "version": "4.17.21" }
            }
        });

        let rebased = rebase_npm_lockfile("../..", lockfile);

        assert_eq!(rebased["version"], "1.0.0");
        assert_eq!(
            rebased["dependencies"]["local-lib"]["version"],
            "file:../../../local-lib"
        );
        assert_eq!(
            rebased["dependencies"]["local-lib"]["dependencies"]["nested"]["version"],
            "file:../../../nested"
        );
        assert_eq!(rebased["dependencies"]["lodash"]["version"], "4.17.21");
    }

    #[test]
    fn yarn_lockfile_references_are_rebased() {
        let lockfile = "\
\"local-lib@file:../local-lib\":
  version \"1.0.0\"

other@./vendor/other, other@^1.0.0:
  version \"1.0.0\"

lodash@^4.17.21:
  version \"4.17.21\"
";
        let rebased = rebase_yarn_lockfile("../..", lockfile);

        assert!(rebased.contains("\"local-lib@file:../../../local-lib\":"));
        assert!(rebased.contains("other@../.././vendor/other, other@^1.0.0:"));
        assert!(rebased.contains("lodash@^4.17.21:"));
    }

    #[test]
    fn yarn_lockfile_without_references_is_unchanged() {
        let lockfile = "lodash@^4.17.21:\n  version \"4.17.21\"\n";
        assert_eq!(rebase_yarn_lockfile("../..", lockfile), lockfile);
    }

    #[test]
    fn yarn_repeated_reference_is_rebased_once_each() {
        let lockfile = "a@../lib:\n  version \"1\"\nb@../lib:\n  version \"1\"\n";
        let rebased = rebase_yarn_lockfile("..", lockfile);
        assert_eq!(
            rebased,
            "a@../../lib:\n  version \"1\"\nb@../../lib:\n  version \"1\"\n"
        );
    }
}
