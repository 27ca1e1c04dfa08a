#![no_main]

use libfuzzer_sys::fuzz_target;

use fnpack::domain::services::parse_yarn_list;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let _ = parse_yarn_list(content);
    }
});
