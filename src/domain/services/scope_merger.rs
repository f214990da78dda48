//! Scope merger
//!
//! Resolves every item of a scope against its expanded base.

use tracing::debug;

use crate::domain::entities::{base_reference, is_overlay_name, DefinitionMap, Scope};
use crate::domain::services::base_expander::{localize, BaseExpander};
use crate::domain::services::merge::merge_definitions;
use crate::error::{BactwinError, BactwinResult};

/// Expand the scope's bases, then merge each item on top of its base.
///
/// With a locale, an item's `<name>.<locale>` overlay is merged into the
/// item before the item is merged onto its base. Overlays never resolve on
/// their own; a dotted item without its stem item is an ordinary item.
/// Result order follows the source items.
pub fn resolve_scope(scope: &Scope, locale: Option<&str>) -> BactwinResult<DefinitionMap> {
    let expanded = BaseExpander::new(&scope.bases)
        .with_locale(locale)
        .expand_all()?;

    let mut resolved = DefinitionMap::with_capacity(scope.items.len());
    for (name, definition) in &scope.items {
        if is_overlay_name(name, &scope.items) {
            continue;
        }
        let base_name = base_reference(name, definition)?.ok_or_else(|| {
            BactwinError::MissingBase {
                name: name.clone(),
            }
        })?;
        let base = expanded
            .get(base_name)
            .ok_or_else(|| BactwinError::UnknownBase {
                name: name.clone(),
                base: base_name.to_string(),
            })?;

        let local = localize(name, definition, &scope.items, locale);
        resolved.insert(name.clone(), merge_definitions(base, &local));
    }

    debug!(
        "resolved {} items against {} bases",
        resolved.len(),
        expanded.len()
    );
    Ok(resolved)
}
