//! Predicates bound to `[?]` placeholders
//!
//! A predicate decides whether a candidate node is selected. Its
//! [`signature`](Predicate::signature) takes part in path cache keys, so two
//! predicates with the same signature must select the same nodes.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;

use crate::config::Configuration;
use crate::error::{JsonPathResult, invalid_expression_error};
use crate::jsonpath::{
    ast::FilterExpression,
    evaluator::{Evaluator, WalkMode},
    filter,
    filter_parser::FilterParser,
    tokenizer::ExpressionParser,
    tokens::Token,
};

/// Node under test together with its document and configuration
#[derive(Debug, Clone, Copy)]
pub struct PredicateContext<'a> {
    item: &'a Value,
    root: &'a Value,
    configuration: &'a Configuration,
}

impl<'a> PredicateContext<'a> {
    #[must_use]
    pub fn new(item: &'a Value, root: &'a Value, configuration: &'a Configuration) -> Self {
        Self {
            item,
            root,
            configuration,
        }
    }

    /// The node being tested
    #[inline]
    #[must_use]
    pub fn item(&self) -> &'a Value {
        self.item
    }

    /// The document root
    #[inline]
    #[must_use]
    pub fn root(&self) -> &'a Value {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn configuration(&self) -> &'a Configuration {
        self.configuration
    }
}

pub trait Predicate: Send + Sync {
    fn apply(&self, ctx: &PredicateContext<'_>) -> bool;

    /// Deterministic text identifying what this predicate selects
    fn signature(&self) -> String;
}

type PredicateFn = dyn Fn(&PredicateContext<'_>) -> bool + Send + Sync;

static NEXT_FUNCTION_ID: AtomicU64 = AtomicU64::new(0);

/// Stock predicate: a parsed filter expression or a named closure
#[derive(Clone)]
pub struct Filter {
    kind: FilterKind,
}

#[derive(Clone)]
enum FilterKind {
    Expression(FilterExpression),
    Function {
        name: String,
        id: u64,
        func: Arc<PredicateFn>,
    },
}

impl Filter {
    /// Parse a filter expression such as `@.price < 10 && @.category == 'fiction'`
    ///
    /// The bracketed forms `[?(...)]` and `[?...]` are accepted too.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidPath` error for malformed expressions or for
    /// expressions containing `[?]` placeholders.
    pub fn parse(text: &str) -> JsonPathResult<Self> {
        let trimmed = text.trim();
        let body = trimmed
            .strip_prefix("[?")
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);

        let mut tokens = ExpressionParser::tokenize_only(body)?;
        let mut slots = 0;
        let expression =
            FilterParser::new(&mut tokens, body, &mut slots).parse_filter_expression()?;

        if !matches!(tokens.front(), Some(Token::EOF) | None) {
            return Err(invalid_expression_error(
                body,
                format!("unexpected trailing input {:?}", tokens.front()),
                None,
            ));
        }
        if slots > 0 {
            return Err(invalid_expression_error(
                body,
                "predicate placeholders are not allowed inside a filter",
                None,
            ));
        }

        Ok(Self {
            kind: FilterKind::Expression(expression),
        })
    }

    /// Predicate backed by a closure
    ///
    /// The signature is `name` plus an id unique to this call, so distinct
    /// closures never share a cached path. Clones keep the id.
    pub fn from_fn<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&PredicateContext<'_>) -> bool + Send + Sync + 'static,
    {
        Self {
            kind: FilterKind::Function {
                name: name.into(),
                id: NEXT_FUNCTION_ID.fetch_add(1, Ordering::Relaxed),
                func: Arc::new(func),
            },
        }
    }
}

impl Predicate for Filter {
    fn apply(&self, ctx: &PredicateContext<'_>) -> bool {
        match &self.kind {
            FilterKind::Expression(expression) => {
                let evaluator = Evaluator::new(ctx.root(), &[], ctx.configuration())
                    .with_mode(WalkMode::Filter);
                filter::matches(expression, ctx.item(), &evaluator).unwrap_or_else(|e| {
                    tracing::debug!(
                        target: "pathwise::evaluator",
                        filter = %expression,
                        error = %e,
                        "filter evaluation failed, treating as no match"
                    );
                    false
                })
            }
            FilterKind::Function { func, .. } => func(ctx),
        }
    }

    fn signature(&self) -> String {
        match &self.kind {
            FilterKind::Expression(expression) => format!("[?({expression})]"),
            FilterKind::Function { name, id, .. } => format!("{name}#{id}"),
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Filter").field(&self.signature()).finish()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn apply(filter: &Filter, item: &Value) -> bool {
        let config = Configuration::default();
        filter.apply(&PredicateContext::new(item, item, &config))
    }

    #[test]
    fn parsed_filter_selects_by_expression() {
        let cheap = Filter::parse("@.price < 10").unwrap();
        assert!(apply(&cheap, &json!({"price": 8.95})));
        assert!(!apply(&cheap, &json!({"price": 22.99})));
        assert!(!apply(&cheap, &json!({"title": "no price"})));
    }

    #[test]
    fn bracketed_form_has_same_signature() {
        let plain = Filter::parse("@.isbn").unwrap();
        let bracketed = Filter::parse("[?(@.isbn)]").unwrap();
        assert_eq!(plain.signature(), bracketed.signature());
        assert_eq!(plain.signature(), "[?(@['isbn'])]");
    }

    #[test]
    fn closure_filter_selects_by_function() {
        let even = Filter::from_fn("even", |ctx| {
            ctx.item().as_i64().is_some_and(|n| n % 2 == 0)
        });
        assert!(even.signature().starts_with("even#"));
        assert!(apply(&even, &json!(4)));
        assert!(!apply(&even, &json!(3)));
    }

    #[test]
    fn same_named_closures_have_distinct_signatures() {
        let big = Filter::from_fn("f", |ctx| ctx.item().as_i64().is_some_and(|n| n > 4));
        let small = Filter::from_fn("f", |ctx| ctx.item().as_i64().is_some_and(|n| n < 4));
        assert_ne!(big.signature(), small.signature());
        assert_eq!(big.signature(), big.clone().signature());
    }

    #[test]
    fn rejects_placeholders_and_trailing_input() {
        assert!(Filter::parse("@.a[?]").is_err());
        assert!(Filter::parse("@.a == 1 )").is_err());
    }
}
