//! Property tests for lockfile rebasing.

use proptest::prelude::*;

use fnpack::domain::services::{rebase_file_reference, rebase_yarn_lockfile, split_module_name};

fn relative_dir() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z][a-z0-9-]{0,8}").unwrap();
    proptest::collection::vec(segment, 1..=3).prop_map(|s| s.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: registry versions are never rewritten.
    #[test]
    fn property_semver_versions_untouched(
        major in 0u32..100, minor in 0u32..100, patch in 0u32..100
    ) {
        let version = format!("{}.{}.{}", major, minor, patch);
        prop_assert_eq!(rebase_file_reference("../..", &version), version);
    }

    /// PROPERTY: parent-relative file references gain the root prefix exactly once.
    #[test]
    fn property_parent_reference_prefixed(dir in relative_dir()) {
        let version = format!("file:../{}", dir);
        let rebased = rebase_file_reference("../..", &version);
        prop_assert_eq!(rebased, format!("file:../../../{}", dir));
    }

    /// PROPERTY: yarn lockfiles without relative references are unchanged.
    #[test]
    fn property_yarn_registry_entries_untouched(
        name in "[a-z][a-z0-9-]{0,10}", major in 0u32..20
    ) {
        let lockfile = format!(
            "{}@^{}.0.0:\n  version \"{}.1.0\"\n  resolved \"https://registry.yarnpkg.com/{}\"\n",
            name, major, major, name
        );
        prop_assert_eq!(rebase_yarn_lockfile("../..", &lockfile), lockfile);
    }

    /// PROPERTY: rebasing arbitrary text never panics.
    #[test]
    fn property_rebase_never_panics(s in "(?s).{0,256}") {
        let _ = rebase_yarn_lockfile("..", &s);
        let _ = rebase_file_reference("..", &s);
    }

    /// PROPERTY: splitting `name@version` reassembles to the input.
    #[test]
    fn property_split_module_name_round_trips(
        scoped in any::<bool>(),
        name in "[a-z][a-z0-9-]{0,10}",
        version in "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}"
    ) {
        let name = if scoped { format!("@scope/{}", name) } else { name };
        let spec = format!("{}@{}", name, version);
        let (n, v) = split_module_name(&spec);
        prop_assert_eq!(n, name.as_str());
        prop_assert_eq!(v, version.as_str());
    }
}
