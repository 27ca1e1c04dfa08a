//! Function artifact binding - which archive each function deploys with

use std::collections::BTreeMap;

use serde::Serialize;

/// Mapping from function name to its deploy-stage artifact path.
///
/// Individual mode binds every function to its own path; unified mode binds
/// all functions to the service path. `service` is only set for providers
/// that read a service-level artifact descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FunctionArtifactBinding {
    functions: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service: Option<String>,
}

impl FunctionArtifactBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, function: impl Into<String>, path: impl Into<String>) {
        self.functions.insert(function.into(), path.into());
    }

    pub fn bind_service(&mut self, path: impl Into<String>) {
        self.service = Some(path.into());
    }

    pub fn get(&self, function: &str) -> Option<&str> {
        self.functions.get(function).map(String::as_str)
    }

    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.functions
            .iter()
            .map(|(f, p)| (f.as_str(), p.as_str()))
    }
}
