//! Scope entity
//!
//! A scope is one definition tree on disk (`properties/` or `objects/`)
//! split into reusable bases and concrete items.

use std::fmt;

use crate::domain::entities::{Definition, DefinitionMap};

/// The two definition scopes, in resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Properties,
    Objects,
}

impl ScopeKind {
    /// Directory name of the scope below the definitions root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            ScopeKind::Properties => "properties",
            ScopeKind::Objects => "objects",
        }
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    pub bases: DefinitionMap,
    pub items: DefinitionMap,
}

impl Scope {
    pub fn new(bases: DefinitionMap, items: DefinitionMap) -> Self {
        Self { bases, items }
    }

    pub fn with_base(mut self, name: impl Into<String>, definition: Definition) -> Self {
        self.bases.insert(name.into(), definition);
        self
    }

    pub fn with_item(mut self, name: impl Into<String>, definition: Definition) -> Self {
        self.items.insert(name.into(), definition);
        self
    }
}

/// Output of one resolution pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedDefinitions {
    /// Property name → resolved property definition
    pub properties: DefinitionMap,
    /// Object name → resolved object, property overrides cross-linked
    pub objects: DefinitionMap,
}
