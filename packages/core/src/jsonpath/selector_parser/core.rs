//! Segment dispatch and token helpers shared by the selector parsers

use std::collections::VecDeque;

use crate::error::{JsonPathResult, invalid_expression_error};
use crate::jsonpath::{ast::JsonSelector, tokens::Token};

/// Parser for the segments of a path, operating on a shared token queue
pub struct SelectorParser<'a> {
    pub(crate) tokens: &'a mut VecDeque<Token>,
    pub(crate) input: &'a str,
    /// Number of `[?]` placeholders seen so far in the whole expression
    pub(crate) predicate_slots: &'a mut usize,
}

impl<'a> SelectorParser<'a> {
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

    /// Parse one segment, appending one selector (two for `..name`) to `out`
    pub fn parse_segment(&mut self, out: &mut Vec<JsonSelector>) -> JsonPathResult<()> {
        match self.consume_token() {
            Some(Token::Root) if out.is_empty() => {
                out.push(JsonSelector::Root);
                Ok(())
            }
            Some(Token::Dot) => {
                out.push(self.parse_dot_target()?);
                Ok(())
            }
            Some(Token::DoubleDot) => {
                out.push(JsonSelector::RecursiveDescent);
                let target = match self.peek_token() {
                    Some(Token::LeftBracket) => {
                        self.consume_token();
                        super::bracket::parse_bracket_selector(self)?
                    }
                    _ => self.parse_dot_target()?,
                };
                out.push(target);
                Ok(())
            }
            Some(Token::LeftBracket) => {
                out.push(super::bracket::parse_bracket_selector(self)?);
                Ok(())
            }
            Some(Token::At) => Err(invalid_expression_error(
                self.input,
                "'@' is only valid inside filter expressions",
                None,
            )),
            Some(other) => Err(invalid_expression_error(
                self.input,
                format!("expected '.', '..' or '[' but found {other:?}"),
                None,
            )),
            None => Err(invalid_expression_error(
                self.input,
                "unexpected end of expression",
                None,
            )),
        }
    }

    /// Member name or wildcard following `.` or `..`
    fn parse_dot_target(&mut self) -> JsonPathResult<JsonSelector> {
        let selector = match self.consume_token() {
            Some(Token::Star) => JsonSelector::Wildcard,
            Some(Token::Identifier(name)) => JsonSelector::Child { name },
            Some(Token::True) => JsonSelector::Child {
                name: "true".to_string(),
            },
            Some(Token::False) => JsonSelector::Child {
                name: "false".to_string(),
            },
            Some(Token::Null) => JsonSelector::Child {
                name: "null".to_string(),
            },
            _ => {
                return Err(invalid_expression_error(
                    self.input,
                    "expected a member name or '*' after '.'",
                    None,
                ));
            }
        };
        Ok(selector)
    }

    #[inline]
    pub(crate) fn peek_token(&self) -> Option<&Token> {
        self.tokens.front()
    }

    #[inline]
    pub(crate) fn consume_token(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    /// Consume the next token, failing unless it has the same variant as `expected`
    pub(crate) fn expect_token(&mut self, expected: Token) -> JsonPathResult<()> {
        match self.consume_token() {
            Some(actual)
                if std::mem::discriminant(&actual) == std::mem::discriminant(&expected) =>
            {
                Ok(())
            }
            Some(actual) => Err(invalid_expression_error(
                self.input,
                format!("expected {expected:?}, found {actual:?}"),
                None,
            )),
            None => Err(invalid_expression_error(
                self.input,
                format!("expected {expected:?}, found end of input"),
                None,
            )),
        }
    }
}
