//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_outputs;
pub mod command_runner;
pub mod host_registry;
pub mod logger;
pub mod packager;

pub use build_outputs::BuildOutputs;
pub use command_runner::{CommandOutput, CommandRunner};
pub use host_registry::HostRegistry;
pub use logger::{LogLevel, Logger, NoopLogger};
pub use packager::{Packager, PackagerOptions, PackagerVersion};
