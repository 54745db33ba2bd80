//! Operand resolution and truth testing

use std::borrow::Cow;
use std::ops::ControlFlow;

use serde_json::Value;

use super::{comparisons, functions};
use crate::error::JsonPathResult;
use crate::jsonpath::{
    ast::{FilterExpression, JsonSelector, LogicalOp},
    evaluator::Evaluator,
};

/// Value of a filter operand
#[derive(Debug)]
pub(super) enum Operand<'a> {
    /// Definite path, literal or function result; `None` when nothing was found
    Single(Option<Cow<'a, Value>>),
    /// Every node matched by an indefinite path
    Nodes(Vec<&'a Value>),
}

impl<'a> Operand<'a> {
    /// Collapse to one comparable value, turning node lists into arrays
    pub(super) fn into_value(self) -> Option<Cow<'a, Value>> {
        match self {
            Operand::Single(value) => value,
            Operand::Nodes(nodes) => Some(Cow::Owned(Value::Array(
                nodes.into_iter().cloned().collect(),
            ))),
        }
    }

    pub(super) fn exists(&self) -> bool {
        match self {
            Operand::Single(value) => value.is_some(),
            Operand::Nodes(nodes) => !nodes.is_empty(),
        }
    }
}

/// Whether `item` satisfies `expression`
pub(crate) fn matches<'a>(
    expression: &FilterExpression,
    item: &'a Value,
    evaluator: &Evaluator<'a>,
) -> JsonPathResult<bool> {
    match expression {
        FilterExpression::Logical {
            left,
            operator,
            right,
        } => {
            let left = matches(left, item, evaluator)?;
            match operator {
                LogicalOp::And if !left => Ok(false),
                LogicalOp::Or if left => Ok(true),
                _ => matches(right, item, evaluator),
            }
        }
        FilterExpression::Comparison {
            left,
            operator,
            right,
        } => {
            let left = resolve(left, item, evaluator)?.into_value();
            let right = resolve(right, item, evaluator)?.into_value();
            Ok(comparisons::compare(
                left.as_deref(),
                *operator,
                right.as_deref(),
            ))
        }
        FilterExpression::Path { .. } => Ok(resolve(expression, item, evaluator)?.exists()),
        FilterExpression::Literal { .. } | FilterExpression::Function { .. } => {
            let value = resolve(expression, item, evaluator)?.into_value();
            Ok(match value.as_deref() {
                None | Some(Value::Null) | Some(Value::Bool(false)) => false,
                Some(_) => true,
            })
        }
    }
}

/// Evaluate an operand of a comparison or function call
pub(super) fn resolve<'a>(
    expression: &FilterExpression,
    item: &'a Value,
    evaluator: &Evaluator<'a>,
) -> JsonPathResult<Operand<'a>> {
    match expression {
        FilterExpression::Literal { value } => {
            Ok(Operand::Single(Some(Cow::Owned(value.to_json()))))
        }
        FilterExpression::Path {
            relative,
            selectors,
        } => {
            let start = if *relative { item } else { evaluator.root() };
            let mut nodes = Vec::new();
            evaluator.evaluate_from(start, selectors, &mut |_, node| {
                nodes.push(node);
                ControlFlow::Continue(())
            })?;

            if selectors.iter().all(JsonSelector::is_definite) {
                Ok(Operand::Single(nodes.into_iter().next().map(Cow::Borrowed)))
            } else {
                Ok(Operand::Nodes(nodes))
            }
        }
        FilterExpression::Function { name, args } => {
            functions::call(name, args, item, evaluator)
                .map(|value| Operand::Single(value.map(Cow::Owned)))
        }
        FilterExpression::Comparison { .. } | FilterExpression::Logical { .. } => {
            let result = matches(expression, item, evaluator)?;
            Ok(Operand::Single(Some(Cow::Owned(Value::Bool(result)))))
        }
    }
}
