//! Compiled paths
//!
//! A [`JsonPath`] is an immutable, reusable pairing of a parsed expression and
//! the predicates its `[?]` placeholders consume. It is what the path cache
//! stores and shares between contexts.

use std::fmt;
use std::ops::ControlFlow;
use std::sync::Arc;

use serde_json::Value;

use super::{
    compiler::JsonPathParser,
    evaluator::Evaluator,
    expression::JsonPathExpression,
    mutation::{MapFunction, Mutation, MutationPlan, mutate, plan},
    normalized_paths::NormalizedPath,
};
use crate::config::{Configuration, EvalOption};
use crate::error::{JsonPathError, JsonPathResult};
use crate::listener::{FoundResult, notify};
use crate::predicate::Predicate;

#[derive(Clone)]
pub struct JsonPath {
    expression: JsonPathExpression,
    predicates: Vec<Arc<dyn Predicate>>,
}

impl JsonPath {
    pub(crate) fn new(expression: JsonPathExpression, predicates: Vec<Arc<dyn Predicate>>) -> Self {
        Self {
            expression,
            predicates,
        }
    }

    /// Compile `path`; see [`JsonPathParser::compile`]
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for blank text and `InvalidPath` for syntax
    /// errors or a placeholder/predicate count mismatch.
    pub fn compile(path: &str, predicates: &[Arc<dyn Predicate>]) -> JsonPathResult<Self> {
        JsonPathParser::compile(path, predicates)
    }

    /// Expression text as compiled
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        self.expression.as_str()
    }

    #[inline]
    #[must_use]
    pub fn expression(&self) -> &JsonPathExpression {
        &self.expression
    }

    #[inline]
    #[must_use]
    pub fn predicates(&self) -> &[Arc<dyn Predicate>] {
        &self.predicates
    }

    #[inline]
    #[must_use]
    pub fn is_definite(&self) -> bool {
        self.expression.is_definite()
    }

    /// Evaluate against `document`
    ///
    /// Definite paths produce the matched value, indefinite paths an array of
    /// all matches. `AsPathList` produces normalized paths instead of values
    /// and `AlwaysReturnList` forces the array form. Listeners attached to
    /// `configuration` see every match and may stop enumeration early.
    ///
    /// # Errors
    ///
    /// Returns `PathNotFound` when a definite path matches nothing, unless
    /// `SuppressExceptions` is enabled.
    pub fn read(&self, document: &Value, configuration: &Configuration) -> JsonPathResult<Value> {
        let as_list = !self.is_definite()
            || configuration.contains_option(EvalOption::AsPathList)
            || configuration.contains_option(EvalOption::AlwaysReturnList);

        let result = self.read_matches(document, configuration).and_then(|matches| {
            if as_list {
                Ok(Value::Array(matches))
            } else {
                matches.into_iter().next().ok_or_else(|| {
                    JsonPathError::path_not_found(format!("no results for path: {}", self.path()))
                })
            }
        });

        result.or_else(|e| {
            if configuration.contains_option(EvalOption::SuppressExceptions)
                && e.is_evaluation_error()
            {
                Ok(if as_list {
                    Value::Array(Vec::new())
                } else {
                    Value::Null
                })
            } else {
                Err(e)
            }
        })
    }

    /// Matches in enumeration order, as values or as normalized path strings
    fn read_matches(
        &self,
        document: &Value,
        configuration: &Configuration,
    ) -> JsonPathResult<Vec<Value>> {
        let evaluator = Evaluator::new(document, &self.predicates, configuration);
        let listeners = configuration.evaluation_listeners();
        let as_paths = configuration.contains_option(EvalOption::AsPathList);

        let mut matches = Vec::new();
        evaluator.evaluate(self.expression.selectors(), &mut |path, value| {
            let rendered = path.to_string();
            let flow = if listeners.is_empty() {
                ControlFlow::Continue(())
            } else {
                notify(listeners, &FoundResult::new(matches.len(), &rendered, value))
            };
            matches.push(if as_paths {
                Value::String(rendered)
            } else {
                value.clone()
            });
            flow
        })?;

        tracing::trace!(
            target: "pathwise::evaluator",
            path = %self.path(),
            matches = matches.len(),
            "path evaluated"
        );
        Ok(matches)
    }

    /// Replace every match with `value`
    ///
    /// # Errors
    ///
    /// Returns `MutationType` when the path addresses the root.
    pub fn set(
        &self,
        document: &mut Value,
        value: Value,
        configuration: &Configuration,
    ) -> JsonPathResult<Vec<NormalizedPath>> {
        self.apply(document, configuration, &Mutation::Set(value))
    }

    /// Replace every match with the result of `func`
    ///
    /// # Errors
    ///
    /// Returns `MutationType` when the path addresses the root.
    pub fn map(
        &self,
        document: &mut Value,
        func: &MapFunction<'_>,
        configuration: &Configuration,
    ) -> JsonPathResult<Vec<NormalizedPath>> {
        self.apply(document, configuration, &Mutation::Map(func))
    }

    /// Remove every match from its container
    ///
    /// # Errors
    ///
    /// Returns `MutationType` when the path addresses the root.
    pub fn delete(
        &self,
        document: &mut Value,
        configuration: &Configuration,
    ) -> JsonPathResult<Vec<NormalizedPath>> {
        self.apply(document, configuration, &Mutation::Delete)
    }

    /// Append `value` to every matched array
    ///
    /// # Errors
    ///
    /// Returns `MutationType`, without changing anything, if any match is not an array.
    pub fn add(
        &self,
        document: &mut Value,
        value: Value,
        configuration: &Configuration,
    ) -> JsonPathResult<Vec<NormalizedPath>> {
        self.apply(document, configuration, &Mutation::Add(value))
    }

    /// Insert or overwrite `key` in every matched object
    ///
    /// # Errors
    ///
    /// Returns `MutationType`, without changing anything, if any match is not an object.
    pub fn put(
        &self,
        document: &mut Value,
        key: &str,
        value: Value,
        configuration: &Configuration,
    ) -> JsonPathResult<Vec<NormalizedPath>> {
        self.apply(
            document,
            configuration,
            &Mutation::Put {
                key: key.to_string(),
                value,
            },
        )
    }

    /// Rename `old_key` to `new_key` in every matched object containing `old_key`
    ///
    /// # Errors
    ///
    /// Returns `MutationType`, without changing anything, if any match is not an object.
    pub fn rename_key(
        &self,
        document: &mut Value,
        old_key: &str,
        new_key: &str,
        configuration: &Configuration,
    ) -> JsonPathResult<Vec<NormalizedPath>> {
        self.apply(
            document,
            configuration,
            &Mutation::RenameKey {
                old_key: old_key.to_string(),
                new_key: new_key.to_string(),
            },
        )
    }

    /// Collect and validate `mutation` against `document` without changing it
    pub(crate) fn plan(
        &self,
        document: &Value,
        configuration: &Configuration,
        mutation: &Mutation<'_>,
    ) -> JsonPathResult<MutationPlan> {
        plan(&self.expression, &self.predicates, document, configuration, mutation)
    }

    fn apply(
        &self,
        document: &mut Value,
        configuration: &Configuration,
        mutation: &Mutation<'_>,
    ) -> JsonPathResult<Vec<NormalizedPath>> {
        mutate(&self.expression, &self.predicates, document, configuration, mutation)
    }
}

impl fmt::Debug for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonPath")
            .field("path", &self.path())
            .field(
                "predicates",
                &self.predicates.iter().map(|p| p.signature()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
