//! Error types for bactwin
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bactwin operations
pub type BactwinResult<T> = Result<T, BactwinError>;

/// Main error type for definition resolution and compilation.
///
/// Every variant is fatal for the compile that raised it. Variants name the
/// offending definition (and the reference it could not resolve) so the
/// failure can be traced back to a single source file.
#[derive(Error, Debug)]
pub enum BactwinError {
    /// Scope directory does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// IO error while reading a definition or writing an output document
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Definition file is not valid YAML
    #[error("invalid YAML in {file}: {message}")]
    InvalidYaml { file: PathBuf, message: String },

    /// Definition file parsed, but its top level is not a mapping
    #[error("definition in {file} must be a mapping, found {found}")]
    NotAMapping { file: PathBuf, found: &'static str },

    /// A YAML mapping key that cannot be used as a JSON object key
    #[error("unsupported mapping key in {file}: keys must be scalars")]
    InvalidKey { file: PathBuf },

    /// `base` names a definition that does not exist in the bases collection
    #[error("unknown base '{base}' referenced by '{name}'")]
    UnknownBase { name: String, base: String },

    /// A definition other than `default` has no (or a null) `base`
    #[error("definition '{name}' has no base; only 'default' may omit it")]
    MissingBase { name: String },

    /// `base` is present but is not a string
    #[error("base of '{name}' must be a string, found {found}")]
    InvalidBaseReference { name: String, found: &'static str },

    /// The base chain loops back on itself
    #[error("base cycle detected: {}", chain.join(" -> "))]
    BaseCycle { chain: Vec<String> },

    /// An object's `properties` entry is not a mapping
    #[error("properties of '{name}' must be a mapping, found {found}")]
    InvalidProperties { name: String, found: &'static str },

    /// An object overrides a property that has no global definition
    #[error("undefined property '{property}' in object '{object}'")]
    UndefinedProperty { object: String, property: String },

    /// `order` has a type that cannot be sorted
    #[error("order of '{name}' must be a number or a string, found {found}")]
    InvalidOrder { name: String, found: &'static str },

    /// Objects disagree on the kind of their `order` values
    #[error("objects mix order kinds: '{first}' has {first_kind}, '{second}' has {second_kind}")]
    MixedOrder {
        first: String,
        first_kind: &'static str,
        second: String,
        second_kind: &'static str,
    },

    /// JSON rendering failed
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Project configuration file is invalid
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl BactwinError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BactwinError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Human readable name of a JSON value's kind, used in error messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a sequence",
        serde_json::Value::Object(_) => "a mapping",
    }
}
