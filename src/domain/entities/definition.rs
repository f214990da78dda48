//! Definition entity
//!
//! A definition is the parsed content of one source file: an ordered
//! key/value tree. Its name is the file stem and is kept by the owning
//! collection, not inside the tree.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{kind_of, BactwinError, BactwinResult};

/// Parsed definition tree (insertion ordered).
pub type Definition = Map<String, Value>;

/// Name → definition, in source (sorted filename) order.
pub type DefinitionMap = IndexMap<String, Definition>;

/// Reserved key naming the parent definition.
pub const BASE_KEY: &str = "base";

/// The sole inheritance root.
pub const DEFAULT_BASE: &str = "default";

/// Key of the per-object property override map.
pub const PROPERTIES_KEY: &str = "properties";

/// Read the `base` reference of a definition.
///
/// Returns `None` when the key is absent or `null`.
pub fn base_reference<'a>(name: &str, definition: &'a Definition) -> BactwinResult<Option<&'a str>> {
    match definition.get(BASE_KEY) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(base)) => Ok(Some(base.as_str())),
        Some(other) => Err(BactwinError::InvalidBaseReference {
            name: name.to_string(),
            found: kind_of(other),
        }),
    }
}

/// Locale overlays are stored next to their definition as `<name>.<locale>`.
pub fn overlay_name(name: &str, locale: &str) -> String {
    format!("{}.{}", name, locale)
}

/// Whether `name` is a locale overlay of another definition in `collection`.
///
/// `<stem>.<locale>` only overlays when `<stem>` exists next to it; a dotted
/// name without its stem is a standalone definition.
pub fn is_overlay_name(name: &str, collection: &DefinitionMap) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(stem, _)| collection.contains_key(stem))
}

/// Base names are lowercase ASCII letters, digits and `-`.
pub fn is_base_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
