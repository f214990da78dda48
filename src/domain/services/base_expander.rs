//! Base expander
//!
//! Resolves every base definition of a scope into its fully merged form by
//! walking its `base` chain up to `default`. Results are memoized per name,
//! so shared ancestors are merged once per pass.
//!
//! Chains must terminate at `default` (whose `base` is `null`). A chain that
//! comes back to a name still being expanded is reported as a cycle.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::entities::{
    base_reference, is_base_name, is_overlay_name, overlay_name, Definition, DefinitionMap,
    DEFAULT_BASE,
};
use crate::domain::services::merge::merge_definitions;
use crate::error::{BactwinError, BactwinResult};

#[derive(Debug, Clone)]
enum Expansion {
    InProgress,
    Done(Definition),
}

/// Expands bases from one source collection. Lives for a single pass.
#[derive(Debug)]
pub struct BaseExpander<'a> {
    source: &'a DefinitionMap,
    locale: Option<&'a str>,
    memo: HashMap<String, Expansion>,
    chain: Vec<String>,
}

impl<'a> BaseExpander<'a> {
    pub fn new(source: &'a DefinitionMap) -> Self {
        Self {
            source,
            locale: None,
            memo: HashMap::new(),
            chain: Vec::new(),
        }
    }

    /// Merge `<name>.<locale>` overlays into bases before they are expanded.
    pub fn with_locale(mut self, locale: Option<&'a str>) -> Self {
        self.locale = locale;
        self
    }

    /// Expand every standalone base of the source collection.
    ///
    /// Locale overlays are not bases of their own. Names that are not valid
    /// base names (including dotted names without a stem base) are skipped
    /// with a warning; items referencing them fail later as unknown.
    pub fn expand_all(mut self) -> BactwinResult<DefinitionMap> {
        let mut expanded = DefinitionMap::with_capacity(self.source.len());
        for name in self.source.keys() {
            if is_overlay_name(name, self.source) {
                continue;
            }
            if !is_base_name(name) {
                warn!("skipping base '{}': names must be lowercase letters, digits or '-'", name);
                continue;
            }
            let definition = self.expand(name)?;
            expanded.insert(name.clone(), definition);
        }
        Ok(expanded)
    }

    /// Expand a single base, recursing into its ancestors first.
    pub fn expand(&mut self, name: &str) -> BactwinResult<Definition> {
        match self.memo.get(name) {
            Some(Expansion::Done(definition)) => return Ok(definition.clone()),
            Some(Expansion::InProgress) => {
                let start = self.chain.iter().position(|n| n == name).unwrap_or(0);
                let mut chain = self.chain[start..].to_vec();
                chain.push(name.to_string());
                return Err(BactwinError::BaseCycle { chain });
            }
            None => {}
        }

        let source = self.source;
        let Some(definition) = source.get(name) else {
            let referrer = self.chain.last().cloned().unwrap_or_else(|| name.to_string());
            return Err(BactwinError::UnknownBase {
                name: referrer,
                base: name.to_string(),
            });
        };

        self.memo.insert(name.to_string(), Expansion::InProgress);
        self.chain.push(name.to_string());

        let parent = match base_reference(name, definition)? {
            None if name == DEFAULT_BASE => Definition::new(),
            None => {
                return Err(BactwinError::MissingBase {
                    name: name.to_string(),
                })
            }
            Some(base) if is_base_name(base) && source.contains_key(base) => self.expand(base)?,
            Some(base) => {
                return Err(BactwinError::UnknownBase {
                    name: name.to_string(),
                    base: base.to_string(),
                })
            }
        };

        let local = localize(name, definition, source, self.locale);
        let expanded = merge_definitions(&parent, &local);
        debug!("expanded base '{}' ({} keys)", name, expanded.len());

        self.chain.pop();
        self.memo
            .insert(name.to_string(), Expansion::Done(expanded.clone()));
        Ok(expanded)
    }
}

/// Apply the `<name>.<locale>` overlay from `collection`, if one exists.
pub fn localize(
    name: &str,
    definition: &Definition,
    collection: &DefinitionMap,
    locale: Option<&str>,
) -> Definition {
    let overlay = locale.and_then(|locale| collection.get(&overlay_name(name, locale)));
    match overlay {
        Some(overlay) => {
            debug!("applying locale overlay to '{}'", name);
            merge_definitions(definition, overlay)
        }
        None => definition.clone(),
    }
}
