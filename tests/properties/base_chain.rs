//! Property tests for base chain expansion.

use proptest::prelude::*;
use serde_json::{Map, Value};

use bactwin::domain::services::resolve_scope;
use bactwin::{merge_definitions, Definition, Scope};

use crate::strategies::arb_definition;

fn with_base(base: Value, rest: &Map<String, Value>) -> Definition {
    let mut definition = Definition::new();
    definition.insert("base".to_string(), base);
    definition.extend(rest.clone());
    definition
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Resolving `default <- layer-1 <- ... <- item` equals folding
    /// `merge_definitions` over the chain from the root.
    #[test]
    fn property_chain_equals_iterative_merge(
        layers in proptest::collection::vec(arb_definition(), 1..6),
        item in arb_definition(),
    ) {
        let mut scope = Scope::default();
        let mut chain = Vec::new();
        let mut parent = Value::Null;
        for (index, layer) in layers.iter().enumerate() {
            let name = if index == 0 { "default".to_string() } else { format!("layer-{index}") };
            let definition = with_base(parent, layer);
            scope = scope.with_base(&name, definition.clone());
            chain.push(definition);
            parent = Value::String(name);
        }
        let item = with_base(parent, &item);
        scope = scope.with_item("item", item.clone());
        chain.push(item);

        let expected = chain
            .iter()
            .fold(Definition::new(), |acc, layer| merge_definitions(&acc, layer));
        let resolved = resolve_scope(&scope, None).unwrap();

        prop_assert_eq!(&resolved["item"], &expected);
    }

    /// PROPERTY: Every item resolves against a shared base independently.
    #[test]
    fn property_siblings_do_not_leak(
        base in arb_definition(),
        first in arb_definition(),
        second in arb_definition(),
    ) {
        let default = with_base(Value::Null, &base);
        let scope = Scope::default()
            .with_base("default", default.clone())
            .with_item("first", with_base(Value::from("default"), &first))
            .with_item("second", with_base(Value::from("default"), &second));

        let resolved = resolve_scope(&scope, None).unwrap();

        let expected = merge_definitions(&default, &with_base(Value::from("default"), &second));
        prop_assert_eq!(&resolved["second"], &expected);
    }
}
