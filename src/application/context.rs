//! Resolution context
//!
//! Everything one compile needs to know, fixed before the pipeline starts.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::infrastructure::{FsDefinitionRepository, FsDocumentSink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveContext {
    /// Definitions root holding `properties/` and `objects/`
    pub root: PathBuf,
    /// Locale whose overlays are applied, if any
    pub locale: Option<String>,
    /// Recognized definition file extensions
    pub extensions: Vec<String>,
    /// Directory receiving the compiled documents
    pub output_dir: PathBuf,
    /// JSON indentation width
    pub indent: usize,
}

impl ResolveContext {
    pub fn from_config(root: &Path, config: &Config) -> Self {
        Self {
            root: root.to_path_buf(),
            locale: config.definitions.locale.clone(),
            extensions: config.definitions.extensions.clone(),
            output_dir: config.output_dir(root),
            indent: config.output.indent,
        }
    }

    pub fn with_locale(mut self, locale: Option<String>) -> Self {
        if locale.is_some() {
            self.locale = locale;
        }
        self
    }

    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = if dir.is_absolute() { dir } else { self.root.join(dir) };
        }
        self
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn repository(&self) -> FsDefinitionRepository {
        FsDefinitionRepository::new(&self.root).with_extensions(self.extensions.clone())
    }

    pub fn sink(&self) -> FsDocumentSink {
        FsDocumentSink::new(&self.output_dir)
    }
}
