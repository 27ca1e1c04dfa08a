//! Assertion helpers for archive and CLI tests.

use std::fs::File;
use std::path::Path;

/// Entry names of a zip archive, in stored order
pub fn zip_entries(path: &Path) -> Vec<String> {
    let file = File::open(path)
        .unwrap_or_else(|e| panic!("Failed to open archive {}: {}", path.display(), e));
    let mut archive = zip::ZipArchive::new(file).expect("valid zip archive");
    (0..archive.len())
        .map(|i| archive.by_index(i).expect("zip entry").name().to_string())
        .collect()
}

/// Assert that a CLI run succeeded, printing its output otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.is_success(),
            "Expected success, got exit code {}.\nOutput:\n{}",
            $result.exit_code,
            $result.combined_output()
        );
    };
}

/// Assert that an archive exists relative to the project root.
#[macro_export]
macro_rules! assert_archive {
    ($env:expr, $path:expr) => {
        let full_path = $env.project_path($path);
        assert!(
            full_path.is_file(),
            "Expected archive at '{}', but it doesn't exist.\nProject root: {:?}",
            $path,
            $env.project_root.path()
        );
    };
}

/// Assert that output contains a substring.
#[macro_export]
macro_rules! assert_output_contains {
    ($output:expr, $expected:expr) => {
        assert!(
            $output.contains($expected),
            "Expected output to contain '{}'.\nActual output:\n{}",
            $expected,
            $output
        );
    };
}
