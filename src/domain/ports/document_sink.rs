//! DocumentSink port - abstraction for publishing compiled documents

use std::path::PathBuf;

use crate::error::BactwinResult;

/// The two rendered output documents.
///
/// Both are rendered before either is handed to a sink, so a rendering
/// failure never leaves a half-written compilation behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDocuments {
    pub properties: String,
    pub objects: String,
}

/// Destination for compiled documents.
pub trait DocumentSink {
    /// Publish both documents; returns the locations written.
    fn publish(&self, documents: &CompiledDocuments) -> BactwinResult<Vec<PathBuf>>;
}
