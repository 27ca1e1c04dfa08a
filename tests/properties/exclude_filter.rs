//! Property tests for exclusion filtering of file sets.

use proptest::prelude::*;

use fnpack::domain::entities::FileSet;
use fnpack::domain::value_objects::ExcludePattern;

fn rel_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z0-9_-]{1,8}").unwrap();
    let ext = prop_oneof![Just("js"), Just("map"), Just("json"), Just("ts")];
    (proptest::collection::vec(segment, 1..=3), ext)
        .prop_map(|(segments, ext)| format!("{}.{}", segments.join("/"), ext))
}

fn file_set() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set(rel_path(), 0..24).prop_map(|s| s.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: nothing left in the set matches the pattern.
    #[test]
    fn property_filtered_set_has_no_matches(files in file_set()) {
        let pattern = ExcludePattern::new(r"\.(map|ts)$").unwrap();
        let mut set = FileSet::new("/root", files);
        set.remove_matching(&pattern);
        prop_assert!(set.iter().all(|f| !pattern.is_match(f)));
    }

    /// PROPERTY: filtering twice removes nothing the second time.
    #[test]
    fn property_filtering_is_idempotent(files in file_set()) {
        let pattern = ExcludePattern::new(r"\.map$").unwrap();
        let mut set = FileSet::new("/root", files);
        set.remove_matching(&pattern);
        let before: Vec<String> = set.iter().map(str::to_string).collect();
        let removed = set.remove_matching(&pattern);
        prop_assert!(removed.is_empty());
        prop_assert_eq!(set.files(), before.as_slice());
    }

    /// PROPERTY: kept and removed files partition the input, order preserved.
    #[test]
    fn property_filtering_partitions_input(files in file_set()) {
        let pattern = ExcludePattern::new(r"^[a-m]").unwrap();
        let mut set = FileSet::new("/root", files.clone());
        let removed = set.remove_matching(&pattern);

        let expected_kept: Vec<String> =
            files.iter().filter(|f| !pattern.is_match(f)).cloned().collect();
        let expected_removed: Vec<String> =
            files.iter().filter(|f| pattern.is_match(f)).cloned().collect();
        prop_assert_eq!(set.files(), expected_kept.as_slice());
        prop_assert_eq!(removed, expected_removed);
    }

    /// PROPERTY: compiling arbitrary patterns never panics.
    #[test]
    fn property_pattern_compile_never_panics(s in "(?s).{0,64}") {
        let _ = ExcludePattern::from_option(Some(s.as_str()));
    }
}
