//! Typed readers over JSON mappings.
//!
//! A key that is absent and a key holding `null` are treated the same way, so
//! documents produced by other tools that emit explicit nulls parse cleanly.

use super::Mapping;
use crate::core::error::ConfigError;
use serde_json::Value;

pub(crate) fn as_mapping<'a>(value: &'a Value, what: &str) -> Result<&'a Mapping, ConfigError> {
    value
        .as_object()
        .ok_or_else(|| ConfigError::MalformedDocument(format!("{} must be a mapping", what)))
}

pub(crate) fn optional_value(map: &Mapping, key: &str) -> Option<Value> {
    match map.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.clone()),
    }
}

pub(crate) fn optional_string(map: &Mapping, key: &str) -> Result<Option<String>, ConfigError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ConfigError::MalformedDocument(format!(
            "'{}' must be a string, got {}",
            key, other
        ))),
    }
}

pub(crate) fn optional_array<'a>(
    map: &'a Mapping,
    key: &str,
) -> Result<Option<&'a Vec<Value>>, ConfigError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(other) => Err(ConfigError::MalformedDocument(format!(
            "'{}' must be a list, got {}",
            key, other
        ))),
    }
}
