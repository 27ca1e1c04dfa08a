//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering abstractions
//!
//! ## Usage
//!
//! ```ignore
//! use fnpack::presentation::factory;
//!
//! let logger = factory::create_logger(LogFormat::Console, Verbosity::Normal);
//! let use_case = factory::create_package_use_case(Path::new(".webpack"), logger);
//! let result = use_case.execute(&mut manifest, &options)?;
//! ```

pub mod factory;
pub mod output;

pub use factory::{create_dependency_use_case, create_logger, create_package_use_case};
