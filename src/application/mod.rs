//! Application Layer
//!
//! Use cases that orchestrate the packaging flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PackageUseCase` - Archive compiled output and assign artifacts
//! - `DependencyUseCase` - Install external modules into each compiled output
//! - `ArtifactDistributor` - Copy archives to the deploy stage and bind them

pub mod dependencies;
pub mod distribute;
pub mod package;

pub use dependencies::{DependencyOptions, DependencyReport, DependencyUseCase, COMPOSITE_DIR};
pub use distribute::ArtifactDistributor;
pub use package::{PackageOptions, PackageResult, PackageUseCase};
