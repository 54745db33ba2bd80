//! Default mapping strategies

use serde_json::{Map, Number, Value};

use super::{MappingProvider, TargetType};
use crate::config::Configuration;
use crate::error::{JsonPathError, JsonPathResult};

/// Mapping provider implementing every [`TargetType`] strategy over `serde_json` values
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeMappingProvider;

impl SerdeMappingProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MappingProvider for SerdeMappingProvider {
    fn map(
        &self,
        value: Value,
        target: &TargetType,
        configuration: &Configuration,
    ) -> JsonPathResult<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        match target {
            TargetType::Json => Ok(value),
            TargetType::Bool => to_bool(&value).map(Value::Bool),
            TargetType::Integer => to_integer(&value).map(Value::from),
            TargetType::Float => to_float(&value).map(|f| {
                Number::from_f64(f).map_or(Value::Null, Value::Number)
            }),
            TargetType::Text => to_text(value, configuration).map(Value::String),
            TargetType::List(element) => match value {
                Value::Array(items) => items
                    .into_iter()
                    .map(|item| self.map(item, element, configuration))
                    .collect::<JsonPathResult<Vec<_>>>()
                    .map(Value::Array),
                other => Err(mismatch(&other, target)),
            },
            TargetType::Map(member) => match value {
                Value::Object(members) => members
                    .into_iter()
                    .map(|(key, item)| Ok((key, self.map(item, member, configuration)?)))
                    .collect::<JsonPathResult<Map<String, Value>>>()
                    .map(Value::Object),
                other => Err(mismatch(&other, target)),
            },
        }
    }
}

fn mismatch(value: &Value, target: &TargetType) -> JsonPathError {
    JsonPathError::conversion(format!("can not convert {value} to {target}"))
}

fn to_bool(value: &Value) -> JsonPathResult<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(false),
        other => Err(mismatch(other, &TargetType::Bool)),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_integer(value: &Value) -> JsonPathResult<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < 9.2e18)
                    .map(|f| f as i64)
            })
            .ok_or_else(|| mismatch(value, &TargetType::Integer)),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| mismatch(value, &TargetType::Integer)),
        other => Err(mismatch(other, &TargetType::Integer)),
    }
}

fn to_float(value: &Value) -> JsonPathResult<f64> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| mismatch(value, &TargetType::Float)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| mismatch(value, &TargetType::Float)),
        other => Err(mismatch(other, &TargetType::Float)),
    }
}

fn to_text(value: Value, configuration: &Configuration) -> JsonPathResult<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        composite => configuration.json_provider().to_json(&composite),
    }
}
