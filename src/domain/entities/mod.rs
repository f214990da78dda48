//! Domain Entities
//!
//! - `Definition` - A free-form key/value tree parsed from one source file
//! - `Scope` - The `bases` and `items` collections of one definition scope
//! - `ResolvedDefinitions` - Fully resolved properties and objects

mod definition;
mod scope;

pub use definition::{
    base_reference, is_base_name, is_overlay_name, overlay_name, Definition, DefinitionMap,
    BASE_KEY, DEFAULT_BASE, PROPERTIES_KEY,
};
pub use scope::{ResolvedDefinitions, Scope, ScopeKind};
