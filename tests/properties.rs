//! Property tests for fnpack.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "filtering is idempotent".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/exclude_filter.rs"]
mod exclude_filter;

#[path = "properties/lockfile_rebase.rs"]
mod lockfile_rebase;

#[path = "properties/host_version.rs"]
mod host_version;
