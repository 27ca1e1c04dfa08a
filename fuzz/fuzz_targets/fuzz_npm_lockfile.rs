#![no_main]

use libfuzzer_sys::fuzz_target;

use fnpack::domain::services::rebase_npm_lockfile;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = rebase_npm_lockfile("../..", value);
    }
});
