//! Common test utilities for fnpack CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project with compiled output and config
//! - Assertion macros: `assert_success!`, `assert_archive!`, etc.
//! - Fixtures: Reusable config and file content constants

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
