//! HostRegistry port - the host's function/service model
//!
//! Packaging reads the service layout from here and writes artifact
//! bindings back into the function records it exposes.

use crate::domain::entities::FunctionRecord;

pub trait HostRegistry {
    /// Version string the host reports about itself
    fn host_version(&self) -> &str;

    /// Name of the service object
    fn service_name(&self) -> &str;

    /// Deployment provider identifier (e.g. `aws`, `google`)
    fn provider_name(&self) -> &str;

    /// Value of `package.individually`
    fn package_individually(&self) -> bool;

    /// Every function known to the service, sorted by name
    fn function_names(&self) -> Vec<String>;

    fn function(&self, name: &str) -> Option<&FunctionRecord>;

    fn function_mut(&mut self, name: &str) -> Option<&mut FunctionRecord>;

    /// Service-level artifact, if one was assigned
    fn service_artifact(&self) -> Option<&str>;

    fn set_service_artifact(&mut self, path: &str);
}
