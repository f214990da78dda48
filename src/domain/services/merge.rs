//! Deep merge
//!
//! The one merge contract used everywhere definitions are layered:
//! - mapping + mapping: recurse key by key
//! - sequence + sequence: concatenate, base elements first
//! - anything else: the override value wins (including `null`)
//!
//! Keys keep the base layer's order; keys only present in the override
//! layer follow in the override's order.

use serde_json::Value;

use crate::domain::entities::Definition;

/// Merge `overlay` on top of `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            Value::Object(merge_definitions(base, overlay))
        }
        (Value::Array(base), Value::Array(overlay)) => {
            Value::Array(base.iter().chain(overlay).cloned().collect())
        }
        (_, overlay) => overlay.clone(),
    }
}

/// Merge two definitions, `overlay` winning on conflicting scalars.
pub fn merge_definitions(base: &Definition, overlay: &Definition) -> Definition {
    let mut merged = base.clone();
    for (key, value) in overlay {
        let value = match merged.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}
