//! Object ordering
//!
//! `objects.json` lists objects ascending by their `order` attribute.
//! Numbers compare numerically and strings lexicographically; all objects
//! must use the same kind. Equal orders keep their source order.

use std::cmp::Ordering;

use serde_json::Value;

use crate::domain::entities::DefinitionMap;
use crate::error::{kind_of, BactwinError, BactwinResult};

/// Attribute objects are sorted by.
pub const ORDER_KEY: &str = "order";

#[derive(Debug, Clone, PartialEq)]
enum OrderKey<'a> {
    Missing,
    Number(f64),
    Text(&'a str),
}

impl OrderKey<'_> {
    fn kind(&self) -> &'static str {
        match self {
            OrderKey::Missing => "no order",
            OrderKey::Number(_) => "a numeric order",
            OrderKey::Text(_) => "a string order",
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (OrderKey::Number(a), OrderKey::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (OrderKey::Text(a), OrderKey::Text(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

fn order_key<'a>(name: &str, value: Option<&'a Value>) -> BactwinResult<OrderKey<'a>> {
    match value {
        None | Some(Value::Null) => Ok(OrderKey::Missing),
        Some(Value::Number(n)) => Ok(OrderKey::Number(n.as_f64().unwrap_or(f64::NAN))),
        Some(Value::String(s)) => Ok(OrderKey::Text(s)),
        Some(other) => Err(BactwinError::InvalidOrder {
            name: name.to_string(),
            found: kind_of(other),
        }),
    }
}

/// Stable sort of resolved objects by `order`.
pub fn sort_by_order(objects: DefinitionMap) -> BactwinResult<DefinitionMap> {
    let mut first: Option<(&str, &'static str)> = None;
    let mut keyed = Vec::with_capacity(objects.len());
    for (index, (name, object)) in objects.iter().enumerate() {
        let key = order_key(name, object.get(ORDER_KEY))?;
        match first {
            None => first = Some((name.as_str(), key.kind())),
            Some((first_name, first_kind)) if first_kind != key.kind() => {
                return Err(BactwinError::MixedOrder {
                    first: first_name.to_string(),
                    first_kind,
                    second: name.clone(),
                    second_kind: key.kind(),
                })
            }
            Some(_) => {}
        }
        keyed.push((key, index));
    }

    // `sort_by` is stable, so equal orders keep source order.
    keyed.sort_by(|(a, _), (b, _)| a.compare(b));
    let positions: Vec<usize> = keyed.into_iter().map(|(_, index)| index).collect();

    let mut entries: Vec<Option<(String, _)>> = objects.into_iter().map(Some).collect();
    Ok(positions
        .into_iter()
        .filter_map(|index| entries[index].take())
        .collect())
}
