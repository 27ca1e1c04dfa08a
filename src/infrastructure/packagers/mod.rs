//! Packager registry
//!
//! Every supported dependency manager is listed once in
//! `REGISTERED_PACKAGERS`. The factory resolves identifiers against that
//! table; there is no other registration path.

pub mod npm;
pub mod yarn;

pub use npm::NpmPackager;
pub use yarn::YarnPackager;

use std::sync::Arc;

use crate::domain::ports::{CommandRunner, Logger, Packager};
use crate::error::{PackResult, PackagingError};

/// Constructs a packager bound to a command runner
pub type PackagerConstructor = fn(Arc<dyn CommandRunner>) -> Box<dyn Packager>;

/// Identifier → constructor table, in listing order
pub const REGISTERED_PACKAGERS: &[(&str, PackagerConstructor)] =
    &[("npm", construct_npm), ("yarn", construct_yarn)];

fn construct_npm(runner: Arc<dyn CommandRunner>) -> Box<dyn Packager> {
    Box::new(NpmPackager::new(runner))
}

fn construct_yarn(runner: Arc<dyn CommandRunner>) -> Box<dyn Packager> {
    Box::new(YarnPackager::new(runner))
}

/// Identifiers of every registered packager
pub fn registered_ids() -> Vec<&'static str> {
    REGISTERED_PACKAGERS.iter().map(|(id, _)| *id).collect()
}

/// Instantiate every registered packager
pub fn all_packagers(runner: Arc<dyn CommandRunner>) -> Vec<Box<dyn Packager>> {
    REGISTERED_PACKAGERS
        .iter()
        .map(|(_, construct)| construct(runner.clone()))
        .collect()
}

/// Resolves packager identifiers to instances
pub struct PackagerFactory {
    runner: Arc<dyn CommandRunner>,
    logger: Arc<dyn Logger>,
}

impl PackagerFactory {
    pub fn new(runner: Arc<dyn CommandRunner>, logger: Arc<dyn Logger>) -> Self {
        Self { runner, logger }
    }

    /// Exact, case-sensitive lookup.
    ///
    /// Unknown identifiers are reported through the logger and returned as
    /// `PackagerNotFound`.
    pub fn resolve(&self, id: &str) -> PackResult<Box<dyn Packager>> {
        match REGISTERED_PACKAGERS.iter().find(|(known, _)| *known == id) {
            Some((_, construct)) => Ok(construct(self.runner.clone())),
            None => {
                self.logger
                    .error(&format!("Could not find packager '{}'", id));
                Err(PackagingError::PackagerNotFound { id: id.to_string() })
            }
        }
    }
}
