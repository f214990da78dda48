//! File System Implementations
//!
//! Atomic file writes and the on-disk document sink.

mod atomic;
mod document_sink;

pub use atomic::{atomic_write, commit_all, stage, StagedFile};
pub use document_sink::{FsDocumentSink, OBJECTS_FILE, PROPERTIES_FILE};
