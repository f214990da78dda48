//! Definitions aggregator
//!
//! Runs the resolution pipeline over both scopes: properties first, then
//! objects, then cross-links every object property override with the
//! resolved global property definition of the same name.

use serde_json::Value;
use tracing::debug;

use crate::domain::entities::{DefinitionMap, ResolvedDefinitions, Scope, PROPERTIES_KEY};
use crate::domain::services::merge::deep_merge;
use crate::domain::services::normalizer::normalize_properties;
use crate::domain::services::scope_merger::resolve_scope;
use crate::error::{kind_of, BactwinError, BactwinResult};

/// Resolve both scopes into their final form.
///
/// `objects` is normalized in place, so shorthand property values are
/// already structured when bases are expanded.
pub fn resolve_definitions(
    properties: &Scope,
    objects: Scope,
    locale: Option<&str>,
) -> BactwinResult<ResolvedDefinitions> {
    let properties = resolve_scope(properties, locale)?;
    let objects = resolve_objects(&properties, objects, locale)?;

    Ok(ResolvedDefinitions {
        properties,
        objects,
    })
}

/// Resolve the object scope against already resolved properties.
pub fn resolve_objects(
    properties: &DefinitionMap,
    mut objects: Scope,
    locale: Option<&str>,
) -> BactwinResult<DefinitionMap> {
    normalize_properties(&mut objects.bases)?;
    normalize_properties(&mut objects.items)?;
    let mut objects = resolve_scope(&objects, locale)?;

    cross_link(properties, &mut objects)?;
    Ok(objects)
}

/// Layer each object's property overrides on top of the global definitions.
pub fn cross_link(properties: &DefinitionMap, objects: &mut DefinitionMap) -> BactwinResult<()> {
    for (object_name, object) in objects.iter_mut() {
        let overrides = match object.get_mut(PROPERTIES_KEY) {
            None | Some(Value::Null) => continue,
            Some(Value::Object(overrides)) => overrides,
            Some(other) => {
                return Err(BactwinError::InvalidProperties {
                    name: object_name.clone(),
                    found: kind_of(other),
                })
            }
        };

        for (property_name, value) in overrides.iter_mut() {
            let global = properties.get(property_name).ok_or_else(|| {
                BactwinError::UndefinedProperty {
                    object: object_name.clone(),
                    property: property_name.clone(),
                }
            })?;
            *value = deep_merge(&Value::Object(global.clone()), value);
        }
        debug!("cross-linked {} properties into '{}'", overrides.len(), object_name);
    }
    Ok(())
}
