//! Property tests for definition parsing.

use std::path::Path;

use proptest::prelude::*;

use bactwin::parse_definition;

/// Plain keys; `null` would parse as a null key.
fn plain_key() -> impl Strategy<Value = String> {
    "[a-z]{1,8}".prop_filter("null is not a string key", |key| key != "null")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary input never panics.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,256}") {
        let _ = parse_definition(&s, Path::new("objects/fuzz.yaml"));
    }

    /// PROPERTY: Flat `key: value` documents keep every key in order.
    #[test]
    fn property_parse_keeps_flat_keys(
        entries in proptest::collection::btree_map(plain_key(), 0i64..1000, 0..8),
    ) {
        let content: String = entries
            .iter()
            .map(|(key, value)| format!("{key}: {value}\n"))
            .collect();

        let definition = parse_definition(&content, Path::new("objects/flat.yaml")).unwrap();

        let keys: Vec<&String> = definition.keys().collect();
        let expected: Vec<&String> = entries.keys().collect();
        prop_assert_eq!(keys, expected);
        for (key, value) in &entries {
            prop_assert_eq!(definition[key.as_str()].as_i64(), Some(*value));
        }
    }
}
