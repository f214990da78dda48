//! File System Definition Repository
//!
//! Loads definition scopes from a definitions root:
//!
//! ```text
//! root/
//! ├── properties/*.yaml        → property items
//! ├── properties/bases/*.yaml  → property bases
//! ├── objects/*.yaml           → object items
//! └── objects/bases/*.yaml     → object bases
//! ```
//!
//! Each file's stem is the definition's name.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::{DefinitionMap, Scope, ScopeKind};
use crate::domain::ports::DefinitionRepository;
use crate::error::{BactwinError, BactwinResult};
use crate::infrastructure::yaml::parse_definition;

/// Directory holding a scope's bases.
pub const BASES_DIR: &str = "bases";

/// Definition file extension recognized by default.
pub const DEFAULT_EXTENSION: &str = "yaml";

/// Definition repository backed by YAML files on disk.
#[derive(Debug, Clone)]
pub struct FsDefinitionRepository {
    root: PathBuf,
    extensions: Vec<String>,
}

impl FsDefinitionRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }

    /// Recognize these file extensions (without the leading dot).
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load a scope directory: its items plus its `bases` sub-directory.
    ///
    /// A directory named `bases` is itself a leaf and has no nested bases.
    pub fn load_dir(&self, dir: &Path) -> BactwinResult<Scope> {
        let items = self.read_collection(dir)?;
        if dir.file_name().is_some_and(|name| name == BASES_DIR) {
            return Ok(Scope::new(DefinitionMap::new(), items));
        }
        let bases = self.read_collection(&dir.join(BASES_DIR))?;
        Ok(Scope::new(bases, items))
    }

    /// Parse every definition file directly inside `dir`, sorted by file name.
    pub fn read_collection(&self, dir: &Path) -> BactwinResult<DefinitionMap> {
        if !dir.is_dir() {
            return Err(BactwinError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| BactwinError::io(dir, e))? {
            let path = entry.map_err(|e| BactwinError::io(dir, e))?.path();
            if path.is_file() && self.is_definition_file(&path) {
                files.push(path);
            }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut definitions = DefinitionMap::with_capacity(files.len());
        for path in files {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let content = fs::read_to_string(&path).map_err(|e| BactwinError::io(&path, e))?;
            let definition = parse_definition(&content, &path)?;
            definitions.insert(name.to_string(), definition);
        }

        debug!("loaded {} definitions from {}", definitions.len(), dir.display());
        Ok(definitions)
    }

    fn is_definition_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|known| known == e))
            .unwrap_or(false)
    }
}

impl DefinitionRepository for FsDefinitionRepository {
    fn load_scope(&self, kind: ScopeKind) -> BactwinResult<Scope> {
        self.load_dir(&self.root.join(kind.dir_name()))
    }
}
