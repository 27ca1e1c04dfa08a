//! Package Module
//!
//! ## Structure
//!
//! - `options` - `PackageOptions`
//! - `result` - `PackageResult`
//! - `use_case` - `PackageUseCase`
//!
//! ## Usage
//!
//! ```ignore
//! use fnpack::application::package::{PackageOptions, PackageUseCase};
//!
//! let use_case = PackageUseCase::new(DirectoryBuildOutputs::new(root.join(".webpack")), logger);
//! let result = use_case.execute(&mut manifest, &PackageOptions::new(root))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{default_concurrency, PackageOptions, DEFAULT_BUILD_OUTPUT};
pub use result::PackageResult;
pub use use_case::PackageUseCase;
