//! Property tests for version-gated artifact assignment.

use proptest::prelude::*;

use fnpack::domain::services::{ArtifactAssignment, NESTED_ARTIFACT_MIN_VERSION};
use semver::Version;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the shape flips exactly at the nested-descriptor version.
    #[test]
    fn property_shape_follows_threshold(
        major in 0u64..5, minor in 0u64..40, patch in 0u64..10
    ) {
        let raw = format!("{}.{}.{}", major, minor, patch);
        let expected = if Version::new(major, minor, patch) < NESTED_ARTIFACT_MIN_VERSION {
            ArtifactAssignment::Legacy
        } else {
            ArtifactAssignment::Nested
        };
        prop_assert_eq!(ArtifactAssignment::for_host_version(&raw).unwrap(), expected);
    }

    /// PROPERTY: arbitrary version strings never panic.
    #[test]
    fn property_version_parse_never_panics(s in "(?s).{0,32}") {
        let _ = ArtifactAssignment::for_host_version(&s);
    }
}
