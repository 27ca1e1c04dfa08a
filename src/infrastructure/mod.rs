//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Enumeration, archiving, artifact copy, build output layout
//! - `host/` - Service manifest (host registry)
//! - `logging/` - Console and tracing loggers
//! - `packagers/` - npm and yarn backends plus the registry
//! - `process` - System command runner

pub mod fs;
pub mod host;
pub mod logging;
pub mod packagers;
pub mod process;

// Re-export for convenience
pub use fs::{copy_artifact, list_files, ArchiveSummary, DirectoryBuildOutputs, ZipArchiveBuilder};
pub use host::ServiceManifest;
pub use logging::{ConsoleLogger, TracingLogger};
pub use packagers::{all_packagers, registered_ids, PackagerFactory, REGISTERED_PACKAGERS};
pub use process::SystemCommandRunner;
