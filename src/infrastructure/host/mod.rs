//! Host registry adapters

mod manifest;

pub use manifest::{ServiceManifest, MANIFEST_FILE_NAME};
