//! DefinitionRepository port - abstraction for loading definition scopes

use crate::domain::entities::{Scope, ScopeKind};
use crate::error::BactwinResult;

/// Source of raw definitions, one scope at a time.
pub trait DefinitionRepository {
    /// Load the `bases` and `items` of a scope.
    fn load_scope(&self, kind: ScopeKind) -> BactwinResult<Scope>;
}
