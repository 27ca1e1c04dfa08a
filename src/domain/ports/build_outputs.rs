//! BuildOutputs port - where the bundler left compiled output
//!
//! The bundler stage is an external collaborator; this port only tells the
//! packaging pipeline which directory holds each unit's compiled files.

use crate::domain::entities::{CompileResult, PackagingUnit};

pub trait BuildOutputs {
    /// Compile result for a packaging unit
    fn compile_result(&self, unit: &PackagingUnit) -> CompileResult;
}
