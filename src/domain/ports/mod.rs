//! Domain Ports (Interfaces)
//!
//! Boundaries between the resolution engine and the outside world.
//! Infrastructure provides the file system implementations.

pub mod definition_repository;
pub mod document_sink;

pub use definition_repository::DefinitionRepository;
pub use document_sink::{CompiledDocuments, DocumentSink};
