//! Filter functions and the regex cache backing `match` and `search`

use std::sync::RwLock;

use hashbrown::HashMap;
use regex::Regex;
use serde_json::Value;

use super::core::{Operand, resolve};
use crate::error::{JsonPathError, JsonPathResult};
use crate::jsonpath::{ast::FilterExpression, evaluator::Evaluator};

/// Maximum number of compiled patterns kept
const REGEX_CACHE_CAPACITY: usize = 64;

/// Compiled regex cache shared by every filter evaluation
pub struct RegexCache {
    cache: RwLock<HashMap<String, Regex>>,
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RegexCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get compiled regex from cache or compile and cache if not present
    ///
    /// # Errors
    ///
    /// Returns the regex compile error for invalid patterns.
    pub fn get_or_compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        if let Ok(cache) = self.cache.read() {
            if let Some(regex) = cache.get(pattern) {
                return Ok(regex.clone());
            }
        }

        let regex = Regex::new(pattern)?;

        if let Ok(mut cache) = self.cache.write() {
            if cache.len() < REGEX_CACHE_CAPACITY {
                cache.insert(pattern.to_string(), regex.clone());
            }
        }

        Ok(regex)
    }
}

lazy_static::lazy_static! {
    pub static ref REGEX_CACHE: RegexCache = RegexCache::new();
}

/// Evaluate a function call; `None` means the result is absent
pub(super) fn call<'a>(
    name: &str,
    args: &[FilterExpression],
    item: &'a Value,
    evaluator: &Evaluator<'a>,
) -> JsonPathResult<Option<Value>> {
    let mut operands = args
        .iter()
        .map(|arg| resolve(arg, item, evaluator))
        .collect::<JsonPathResult<Vec<_>>>()?
        .into_iter();
    let mut next = || {
        operands.next().ok_or_else(|| {
            JsonPathError::evaluation(format!("missing argument for function '{name}'"))
        })
    };

    match name {
        "length" => Ok(next()?.into_value().and_then(|value| match value.as_ref() {
            Value::String(s) => Some(Value::from(s.chars().count())),
            Value::Array(items) => Some(Value::from(items.len())),
            Value::Object(members) => Some(Value::from(members.len())),
            _ => None,
        })),
        "count" => Ok(Some(Value::from(match next()? {
            Operand::Nodes(nodes) => nodes.len(),
            Operand::Single(value) => usize::from(value.is_some()),
        }))),
        "value" => Ok(match next()? {
            Operand::Nodes(nodes) if nodes.len() == 1 => nodes.first().map(|v| (*v).clone()),
            Operand::Nodes(_) => None,
            Operand::Single(value) => value.map(std::borrow::Cow::into_owned),
        }),
        "match" | "search" => {
            let subject = next()?.into_value();
            let pattern = next()?.into_value();
            let (Some(Value::String(subject)), Some(Value::String(pattern))) =
                (subject.as_deref(), pattern.as_deref())
            else {
                return Ok(Some(Value::Bool(false)));
            };

            let pattern = if name == "match" {
                format!("^(?:{pattern})$")
            } else {
                pattern.clone()
            };
            match REGEX_CACHE.get_or_compile(&pattern) {
                Ok(regex) => Ok(Some(Value::Bool(regex.is_match(subject)))),
                Err(e) => {
                    log::debug!("invalid regex '{pattern}' in {name}(): {e}");
                    Ok(Some(Value::Bool(false)))
                }
            }
        }
        other => Err(JsonPathError::evaluation(format!(
            "unknown function '{other}'"
        ))),
    }
}
