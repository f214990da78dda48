//! bactwin - BACnet object template compiler
//!
//! Resolves hand-authored YAML definitions of BACnet properties and objects
//! into two flat JSON documents. Definitions inherit from named bases
//! through `base` chains rooted at `default`; objects override global
//! property definitions per property.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{CompileResult, CompileUseCase, ResolveContext};
pub use config::Config;
pub use domain::entities::{Definition, DefinitionMap, ResolvedDefinitions, Scope, ScopeKind};
pub use domain::services::{deep_merge, merge_definitions, resolve_definitions};
pub use error::{BactwinError, BactwinResult};
pub use infrastructure::{parse_definition, FsDefinitionRepository, FsDocumentSink};
