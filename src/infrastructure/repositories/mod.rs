//! Repository Implementations

mod definitions;

pub use definitions::{FsDefinitionRepository, BASES_DIR, DEFAULT_EXTENSION};
