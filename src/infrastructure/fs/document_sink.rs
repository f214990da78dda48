//! Writes compiled documents into an output directory.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::ports::{CompiledDocuments, DocumentSink};
use crate::error::BactwinResult;
use crate::infrastructure::fs::{commit_all, stage};

pub const PROPERTIES_FILE: &str = "properties.json";
pub const OBJECTS_FILE: &str = "objects.json";

/// Document sink writing `properties.json` and `objects.json`.
///
/// The pair is replaced together: a failed write leaves both previous
/// documents in place.
#[derive(Debug, Clone)]
pub struct FsDocumentSink {
    dir: PathBuf,
}

impl FsDocumentSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DocumentSink for FsDocumentSink {
    fn publish(&self, documents: &CompiledDocuments) -> BactwinResult<Vec<PathBuf>> {
        let properties = self.dir.join(PROPERTIES_FILE);
        let objects = self.dir.join(OBJECTS_FILE);

        // Both documents are on disk before either replaces its target.
        let staged = vec![
            stage(&properties, documents.properties.as_bytes())?,
            stage(&objects, documents.objects.as_bytes())?,
        ];
        commit_all(staged)?;

        info!("wrote {} and {}", properties.display(), objects.display());
        Ok(vec![properties, objects])
    }
}
