//! Domain Layer
//!
//! Packaging rules without process or archive I/O.
//!
//! ## Structure
//!
//! - `entities/` - Function records, artifacts, file sets, lockfiles
//! - `value_objects/` - Packaging mode, exclusion pattern, provider policy
//! - `services/` - Artifact assignment, lockfile rebasing, yarn output parsing
//! - `ports/` - Interfaces implemented by the infrastructure layer

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
