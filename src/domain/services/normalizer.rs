//! Property normalizer
//!
//! Object definitions may list properties in shorthand (`units: 62`).
//! Before any merge happens, each shorthand value is rewritten into the
//! structured form (`units: {content: 62}`) so base and override layers
//! always merge record against record.

use serde_json::{Map, Value};

use crate::domain::entities::{DefinitionMap, PROPERTIES_KEY};
use crate::error::{kind_of, BactwinError, BactwinResult};

/// Structured field that receives a shorthand value.
pub const CONTENT_KEY: &str = "content";

/// Normalize the `properties` map of every definition in place.
///
/// A missing or `null` properties entry is left alone.
pub fn normalize_properties(definitions: &mut DefinitionMap) -> BactwinResult<()> {
    for (name, definition) in definitions.iter_mut() {
        match definition.get_mut(PROPERTIES_KEY) {
            None | Some(Value::Null) => {}
            Some(Value::Object(properties)) => {
                for value in properties.values_mut() {
                    if is_shorthand(value) {
                        let content = value.take();
                        *value = Value::Object(Map::from_iter([(CONTENT_KEY.to_string(), content)]));
                    }
                }
            }
            Some(other) => {
                return Err(BactwinError::InvalidProperties {
                    name: name.clone(),
                    found: kind_of(other),
                })
            }
        }
    }
    Ok(())
}

fn is_shorthand(value: &Value) -> bool {
    matches!(
        value,
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
    )
}
