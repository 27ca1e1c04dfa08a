//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::{DependencyUseCase, PackageUseCase};
use crate::config::{LogFormat, Verbosity};
use crate::domain::ports::{CommandRunner, Logger};
use crate::infrastructure::logging::init_subscriber;
use crate::infrastructure::{
    ConsoleLogger, DirectoryBuildOutputs, PackagerFactory, SystemCommandRunner, TracingLogger,
};

/// Type alias for the concrete PackageUseCase with all dependencies
pub type ConcretePackageUseCase = PackageUseCase<DirectoryBuildOutputs>;

/// Type alias for the concrete DependencyUseCase with all dependencies
pub type ConcreteDependencyUseCase = DependencyUseCase<DirectoryBuildOutputs>;

/// Create the logger selected by configuration.
///
/// The tracing format installs a global subscriber whose default filter
/// follows `verbosity`; `RUST_LOG` overrides it.
pub fn create_logger(format: LogFormat, verbosity: Verbosity) -> Arc<dyn Logger> {
    match format {
        LogFormat::Console => Arc::new(ConsoleLogger::stderr(verbosity)),
        LogFormat::Tracing => {
            init_subscriber(tracing_directive(verbosity));
            Arc::new(TracingLogger::new())
        }
    }
}

fn tracing_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "fnpack=error",
        Verbosity::Normal => "fnpack=info",
        Verbosity::Verbose => "fnpack=debug",
        Verbosity::Debug => "debug",
    }
}

/// Create a package use case reading compiled output under `build_root`
pub fn create_package_use_case(build_root: &Path, logger: Arc<dyn Logger>) -> ConcretePackageUseCase {
    PackageUseCase::new(DirectoryBuildOutputs::new(build_root), logger)
}

/// Create a dependency use case writing into units under `build_root`
pub fn create_dependency_use_case(
    build_root: &Path,
    logger: Arc<dyn Logger>,
) -> ConcreteDependencyUseCase {
    DependencyUseCase::new(DirectoryBuildOutputs::new(build_root), logger)
}

/// Create a packager factory that runs the real tools
pub fn create_packager_factory(logger: Arc<dyn Logger>) -> PackagerFactory {
    let runner: Arc<dyn CommandRunner> = Arc::new(SystemCommandRunner::new());
    PackagerFactory::new(runner, logger)
}
