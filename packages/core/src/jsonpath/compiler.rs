//! Path expression compiler and entry point

use std::sync::Arc;

use crate::error::{JsonPathError, JsonPathResult, invalid_expression_error};
use crate::jsonpath::{
    expression::JsonPathExpression, path::JsonPath, tokenizer::ExpressionParser,
};
use crate::predicate::Predicate;

/// Path expression parser and compiler
pub struct JsonPathParser;

impl JsonPathParser {
    /// Parse expression text into its selector chain
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error for blank text and an `InvalidPath`
    /// error for any syntax error.
    pub fn parse_expression(expression: &str) -> JsonPathResult<JsonPathExpression> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(JsonPathError::invalid_argument(
                "path can not be null or empty",
            ));
        }

        if expression.starts_with('@') {
            return Err(invalid_expression_error(
                expression,
                "current node identifier '@' is only valid within filter expressions",
                Some(0),
            ));
        }

        let mut parser = ExpressionParser::new(expression);
        let selectors = parser.parse()?;
        Ok(JsonPathExpression::new(
            selectors,
            expression.to_string(),
            parser.predicate_count(),
        ))
    }

    /// Compile expression text together with the predicates its `[?]` placeholders consume
    ///
    /// # Errors
    ///
    /// Everything [`JsonPathParser::parse_expression`] reports, plus an
    /// `InvalidPath` error when the number of placeholders differs from the
    /// number of predicates.
    pub fn compile(
        expression: &str,
        predicates: &[Arc<dyn Predicate>],
    ) -> JsonPathResult<JsonPath> {
        let parsed = Self::parse_expression(expression)?;
        if parsed.predicate_slots() != predicates.len() {
            return Err(invalid_expression_error(
                parsed.as_str(),
                format!(
                    "found {} predicate placeholder(s) but {} predicate(s) were supplied",
                    parsed.predicate_slots(),
                    predicates.len()
                ),
                None,
            ));
        }

        tracing::trace!(
            target: "pathwise::evaluator",
            path = %parsed.as_str(),
            definite = parsed.is_definite(),
            "compiled path expression"
        );

        Ok(JsonPath::new(parsed, predicates.to_vec()))
    }
}
