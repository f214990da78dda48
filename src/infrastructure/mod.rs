//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Atomic writes and the JSON document sink
//! - `repositories/` - YAML definition loading
//! - `serializer` - Rendering resolved definitions as JSON documents
//! - `yaml` - YAML to definition tree conversion

pub mod fs;
pub mod repositories;
pub mod serializer;
pub mod yaml;

// Re-export for convenience
pub use fs::{atomic_write, FsDocumentSink};
pub use repositories::FsDefinitionRepository;
pub use serializer::render_documents;
pub use yaml::parse_definition;
