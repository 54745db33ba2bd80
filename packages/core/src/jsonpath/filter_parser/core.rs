//! Filter parser state and token helpers

use std::collections::VecDeque;

use crate::error::{JsonPathResult, invalid_expression_error};
use crate::jsonpath::{ast::FilterExpression, tokens::Token};

/// Parser for filter expressions, sharing the token queue of the enclosing path
pub struct FilterParser<'a> {
    pub(super) tokens: &'a mut VecDeque<Token>,
    pub(super) input: &'a str,
    pub(super) predicate_slots: &'a mut usize,
}

impl<'a> FilterParser<'a> {
    #[inline]
    pub fn new(
        tokens: &'a mut VecDeque<Token>,
        input: &'a str,
        predicate_slots: &'a mut usize,
    ) -> Self {
        Self {
            tokens,
            input,
            predicate_slots,
        }
    }

    /// Parse a complete filter expression (lowest precedence first)
    #[inline]
    pub fn parse_filter_expression(&mut self) -> JsonPathResult<FilterExpression> {
        self.parse_logical_or()
    }

    #[inline]
    pub(super) fn consume_token(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    #[inline]
    #[must_use]
    pub(super) fn peek_token(&self) -> Option<&Token> {
        self.tokens.front()
    }

    pub(super) fn expect_token(&mut self, expected: Token) -> JsonPathResult<()> {
        match self.consume_token() {
            Some(token) if std::mem::discriminant(&token) == std::mem::discriminant(&expected) => {
                Ok(())
            }
            Some(token) => Err(invalid_expression_error(
                self.input,
                format!("expected {expected:?}, found {token:?}"),
                None,
            )),
            None => Err(invalid_expression_error(
                self.input,
                format!("expected {expected:?}, but reached end of input"),
                None,
            )),
        }
    }
}
