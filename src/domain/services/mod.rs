//! Domain Services
//!
//! Stateless packaging rules. None of these touch the file system.

mod artifact_assignment;
mod lockfile_rebase;
mod yarn_list;

pub use artifact_assignment::{ArtifactAssignment, NESTED_ARTIFACT_MIN_VERSION};
pub use lockfile_rebase::{rebase_file_reference, rebase_npm_lockfile, rebase_yarn_lockfile};
pub use yarn_list::{parse_yarn_list, split_module_name, YarnListError};
