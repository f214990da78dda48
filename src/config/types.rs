//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BactwinResult;
use crate::infrastructure::repositories::DEFAULT_EXTENSION;
use crate::infrastructure::serializer::DEFAULT_INDENT;

use super::loader::{self, ConfigWarning};

/// Where and how definitions are read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionsConfig {
    /// Locale whose `<name>.<locale>` overlays are applied; none by default
    #[serde(default)]
    pub locale: Option<String>,

    /// Recognized definition file extensions, without the dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for DefinitionsConfig {
    fn default() -> Self {
        Self {
            locale: None,
            extensions: default_extensions(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec![DEFAULT_EXTENSION.to_string()]
}

/// Where compiled documents go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory; relative paths are resolved against the root
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Spaces per indentation level in the JSON documents
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            indent: default_indent(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("compilation")
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub definitions: DefinitionsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BactwinResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BactwinResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Project config of `root` (if any) with environment overrides applied.
    pub fn load_for_root(root: &Path) -> BactwinResult<(Self, Vec<ConfigWarning>)> {
        loader::load_for_root(root)
    }

    /// Apply environment variable overrides (BACTWIN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Output directory, resolved against the definitions root.
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        if self.output.dir.is_absolute() {
            self.output.dir.clone()
        } else {
            root.join(&self.output.dir)
        }
    }
}
