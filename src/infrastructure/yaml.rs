//! YAML definition parsing
//!
//! Definitions are authored in YAML but resolved and emitted as JSON, so
//! each file is parsed into a YAML tree and converted into a JSON object.
//! Scalar mapping keys (numbers, booleans) are stringified on the way.

use std::path::Path;

use serde_json::{Map, Number, Value};
use serde_yaml_ng::Value as YamlValue;

use crate::domain::entities::Definition;
use crate::error::{kind_of, BactwinError, BactwinResult};

/// Parse the content of one definition file.
///
/// An empty document (or one holding only comments or `null`) is an empty
/// definition.
pub fn parse_definition(content: &str, file: &Path) -> BactwinResult<Definition> {
    if content.trim().is_empty() {
        return Ok(Definition::new());
    }

    let yaml: YamlValue =
        serde_yaml_ng::from_str(content).map_err(|e| BactwinError::InvalidYaml {
            file: file.to_path_buf(),
            message: format_yaml_error(&e),
        })?;

    match to_json(&yaml, file)? {
        Value::Null => Ok(Definition::new()),
        Value::Object(definition) => Ok(definition),
        other => Err(BactwinError::NotAMapping {
            file: file.to_path_buf(),
            found: kind_of(&other),
        }),
    }
}

fn to_json(value: &YamlValue, file: &Path) -> BactwinResult<Value> {
    Ok(match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(*b),
        YamlValue::Number(n) => Value::Number(to_json_number(n, file)?),
        YamlValue::String(s) => Value::String(s.clone()),
        YamlValue::Sequence(items) => Value::Array(
            items
                .iter()
                .map(|item| to_json(item, file))
                .collect::<BactwinResult<_>>()?,
        ),
        YamlValue::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping.iter() {
                object.insert(key_string(key, file)?, to_json(value, file)?);
            }
            Value::Object(object)
        }
        YamlValue::Tagged(tagged) => to_json(&tagged.value, file)?,
    })
}

fn to_json_number(n: &serde_yaml_ng::Number, file: &Path) -> BactwinResult<Number> {
    if let Some(i) = n.as_i64() {
        return Ok(Number::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Number::from(u));
    }
    n.as_f64()
        .and_then(Number::from_f64)
        .ok_or_else(|| BactwinError::InvalidYaml {
            file: file.to_path_buf(),
            message: format!("number {} cannot be represented in JSON", n),
        })
}

fn key_string(key: &YamlValue, file: &Path) -> BactwinResult<String> {
    match key {
        YamlValue::String(s) => Ok(s.clone()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Tagged(tagged) => key_string(&tagged.value, file),
        _ => Err(BactwinError::InvalidKey {
            file: file.to_path_buf(),
        }),
    }
}

fn format_yaml_error(err: &serde_yaml_ng::Error) -> String {
    let err_str = err.to_string();
    match err.location() {
        Some(loc) => format!("line {}: {}", loc.line(), err_str),
        None => err_str,
    }
}
