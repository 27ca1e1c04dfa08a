//! File system adapters
//!
//! - `enumerator` - recursive listing plus exclusion filtering
//! - `archive` - deterministic zip writer
//! - `copy` - atomic artifact copy and directory mirroring
//! - `build_outputs` - compiled output directories

pub mod archive;
pub mod build_outputs;
pub mod copy;
pub mod enumerator;

pub use archive::{ArchiveSummary, ZipArchiveBuilder, DEFAULT_COMPRESSION_LEVEL};
pub use build_outputs::{DirectoryBuildOutputs, SERVICE_OUTPUT_DIR};
pub use copy::{copy_artifact, copy_dir_all};
pub use enumerator::list_files;
