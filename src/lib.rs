//! fnpack - serverless artifact packaging
//!
//! Turns per-function (or whole-service) compiled output directories into
//! deterministic zip archives, installs external modules through a pluggable
//! packager (npm, yarn), and records on the host's function records which
//! archive each function deploys with.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    ArtifactDistributor, DependencyOptions, DependencyReport, DependencyUseCase, PackageOptions,
    PackageResult, PackageUseCase,
};
pub use config::Config;
pub use domain::entities::{FileSet, FunctionArtifactBinding, FunctionRecord};
pub use domain::ports::{HostRegistry, Logger, Packager};
pub use domain::value_objects::{ExcludePattern, PackagingMode};
pub use error::{PackResult, PackagingError};
pub use infrastructure::{list_files, PackagerFactory, ServiceManifest, ZipArchiveBuilder};
