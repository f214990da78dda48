//! Property tests for object ordering.

use proptest::prelude::*;
use serde_json::Value;

use bactwin::domain::services::sort_by_order;
use bactwin::{Definition, DefinitionMap};

fn objects(orders: &[i64]) -> DefinitionMap {
    orders
        .iter()
        .enumerate()
        .map(|(index, order)| {
            let mut object = Definition::new();
            object.insert("order".to_string(), Value::from(*order));
            (format!("o{index:03}"), object)
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Sorting is a permutation ordered by `order`, and equal
    /// orders keep their source order.
    #[test]
    fn property_sort_is_stable_and_ascending(orders in proptest::collection::vec(-5i64..5, 0..24)) {
        let sorted = sort_by_order(objects(&orders)).unwrap();

        prop_assert_eq!(sorted.len(), orders.len());
        let keys: Vec<(i64, &String)> = sorted
            .iter()
            .map(|(name, object)| (object["order"].as_i64().unwrap(), name))
            .collect();
        for pair in keys.windows(2) {
            prop_assert!(pair[0] <= pair[1], "{:?} before {:?}", pair[0], pair[1]);
        }
    }

    /// PROPERTY: Sorting sorted objects changes nothing.
    #[test]
    fn property_sort_is_idempotent(orders in proptest::collection::vec(any::<i64>(), 0..24)) {
        let once = sort_by_order(objects(&orders)).unwrap();
        let twice = sort_by_order(once.clone()).unwrap();

        let once: Vec<&String> = once.keys().collect();
        let twice: Vec<&String> = twice.keys().collect();
        prop_assert_eq!(once, twice);
    }
}
