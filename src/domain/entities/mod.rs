//! Domain Entities
//!
//! - `FunctionRecord` - A host function and its package settings
//! - `Artifact` - Archive location in the build output and deploy stage
//! - `FileSet` - Enumerated files beneath a compiled output directory
//! - `Lockfile` - Packager lockfile content

mod artifact;
mod binding;
mod compile_result;
mod dependency_tree;
mod file_set;
mod function_record;
mod lockfile;

pub use artifact::{archive_file_name, Artifact, ArtifactLayout, ARCHIVE_SUFFIX, DEPLOY_STAGING_DIR};
pub use binding::FunctionArtifactBinding;
pub use compile_result::{CompileResult, PackagingUnit};
pub use dependency_tree::{DependencyNode, DependencyTree};
pub use file_set::FileSet;
pub use function_record::{FunctionRecord, PackageSettings};
pub use lockfile::{Lockfile, LockfileFormat};
