#![no_main]

use libfuzzer_sys::fuzz_target;

use fnpack::domain::services::rebase_yarn_lockfile;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let _ = rebase_yarn_lockfile("../..", content);
    }
});
