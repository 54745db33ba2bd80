//! Precedence climbing for logical operators, comparisons and primaries

use super::core::FilterParser;
use crate::error::{JsonPathResult, invalid_expression_error};
use crate::jsonpath::{
    ast::{ComparisonOp, FilterExpression, FilterValue, LogicalOp},
    selector_parser::SelectorParser,
    tokens::Token,
};

/// Functions understood by the filter evaluator, with their argument counts
const KNOWN_FUNCTIONS: [(&str, usize); 5] = [
    ("length", 1),
    ("count", 1),
    ("value", 1),
    ("match", 2),
    ("search", 2),
];

impl FilterParser<'_> {
    pub(super) fn parse_logical_or(&mut self) -> JsonPathResult<FilterExpression> {
        let mut left = self.parse_logical_and()?;
        while matches!(self.peek_token(), Some(Token::LogicalOr)) {
            self.consume_token();
            let right = self.parse_logical_and()?;
            left = FilterExpression::Logical {
                left: Box::new(left),
                operator: LogicalOp::Or,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    pub(super) fn parse_logical_and(&mut self) -> JsonPathResult<FilterExpression> {
        let mut left = self.parse_comparison()?;
        while matches!(self.peek_token(), Some(Token::LogicalAnd)) {
            self.consume_token();
            let right = self.parse_comparison()?;
            left = FilterExpression::Logical {
                left: Box::new(left),
                operator: LogicalOp::And,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    pub(super) fn parse_comparison(&mut self) -> JsonPathResult<FilterExpression> {
        let left = self.parse_primary()?;

        let operator = match self.peek_token() {
            Some(Token::Equal) => ComparisonOp::Equal,
            Some(Token::NotEqual) => ComparisonOp::NotEqual,
            Some(Token::Less) => ComparisonOp::Less,
            Some(Token::LessEq) => ComparisonOp::LessEq,
            Some(Token::Greater) => ComparisonOp::Greater,
            Some(Token::GreaterEq) => ComparisonOp::GreaterEq,
            _ => return Ok(left),
        };
        self.consume_token();
        let right = self.parse_primary()?;

        Ok(FilterExpression::Comparison {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub(super) fn parse_primary(&mut self) -> JsonPathResult<FilterExpression> {
        let literal = |value| Ok(FilterExpression::Literal { value });
        match self.consume_token() {
            Some(Token::At) => self.parse_path(true),
            Some(Token::Root) => self.parse_path(false),
            Some(Token::String(s)) => literal(FilterValue::String(s)),
            Some(Token::Integer(i)) => literal(FilterValue::Integer(i)),
            Some(Token::Number(n)) => literal(FilterValue::Number(n)),
            Some(Token::True) => literal(FilterValue::Boolean(true)),
            Some(Token::False) => literal(FilterValue::Boolean(false)),
            Some(Token::Null) => literal(FilterValue::Null),
            Some(Token::LeftParen) => {
                let expr = self.parse_logical_or()?;
                self.expect_token(Token::RightParen)?;
                Ok(expr)
            }
            Some(Token::Identifier(name)) => {
                if !matches!(self.peek_token(), Some(Token::LeftParen)) {
                    return Err(invalid_expression_error(
                        self.input,
                        format!("unexpected identifier '{name}', did you mean a function call?"),
                        None,
                    ));
                }
                self.consume_token();
                let args = self.parse_function_arguments()?;
                self.expect_token(Token::RightParen)?;
                self.validate_function_arguments(&name, &args)?;
                Ok(FilterExpression::Function { name, args })
            }
            other => Err(invalid_expression_error(
                self.input,
                format!("expected path, literal or parenthesized expression, found {other:?}"),
                None,
            )),
        }
    }

    /// Path continuing after `@` or `$`, reusing the selector grammar
    fn parse_path(&mut self, relative: bool) -> JsonPathResult<FilterExpression> {
        let mut selectors = Vec::new();
        while self.peek_token().is_some_and(Token::continues_path) {
            let mut selector_parser =
                SelectorParser::new(self.tokens, self.input, self.predicate_slots);
            selector_parser.parse_segment(&mut selectors)?;
        }
        Ok(FilterExpression::Path {
            relative,
            selectors,
        })
    }

    fn parse_function_arguments(&mut self) -> JsonPathResult<Vec<FilterExpression>> {
        let mut args = Vec::new();
        if matches!(self.peek_token(), Some(Token::RightParen)) {
            return Ok(args);
        }
        args.push(self.parse_logical_or()?);
        while matches!(self.peek_token(), Some(Token::Comma)) {
            self.consume_token();
            args.push(self.parse_logical_or()?);
        }
        Ok(args)
    }

    fn validate_function_arguments(
        &self,
        name: &str,
        args: &[FilterExpression],
    ) -> JsonPathResult<()> {
        let Some((_, expected)) = KNOWN_FUNCTIONS.iter().find(|(known, _)| *known == name) else {
            return Err(invalid_expression_error(
                self.input,
                format!("unknown function '{name}'"),
                None,
            ));
        };
        if args.len() != *expected {
            return Err(invalid_expression_error(
                self.input,
                format!(
                    "function '{name}' requires exactly {expected} argument{}, found {}",
                    if *expected == 1 { "" } else { "s" },
                    args.len()
                ),
                None,
            ));
        }
        Ok(())
    }
}
