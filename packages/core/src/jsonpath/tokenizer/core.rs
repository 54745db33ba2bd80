//! Expression parser driving tokenization and selector parsing

use std::collections::VecDeque;

use crate::jsonpath::{
    ast::JsonSelector,
    selector_parser::SelectorParser,
    tokens::Token,
};
use crate::error::{JsonPathResult, invalid_expression_error};

/// Main expression parser that combines tokenization and parsing
pub struct ExpressionParser {
    pub(crate) input: String,
    pub(crate) tokens: VecDeque<Token>,
    pub(crate) predicate_slots: usize,
}

impl ExpressionParser {
    #[inline]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            tokens: VecDeque::new(),
            predicate_slots: 0,
        }
    }

    /// Parse a complete expression into its selector chain
    ///
    /// The first selector of a successful parse is always [`JsonSelector::Root`].
    pub fn parse(&mut self) -> JsonPathResult<Vec<JsonSelector>> {
        self.tokenize()?;

        if !matches!(self.tokens.front(), Some(Token::Root)) {
            return Err(invalid_expression_error(
                &self.input,
                "path expressions must start with '$'",
                Some(0),
            ));
        }
        if matches!(self.tokens.get(1), Some(Token::Identifier(_))) {
            return Err(invalid_expression_error(
                &self.input,
                "member access after '$' requires '.' or '[]' notation",
                Some(1),
            ));
        }

        let mut selectors = Vec::new();
        while !matches!(self.tokens.front(), Some(Token::EOF) | None) {
            let mut selector_parser =
                SelectorParser::new(&mut self.tokens, &self.input, &mut self.predicate_slots);
            selector_parser.parse_segment(&mut selectors)?;
        }

        Ok(selectors)
    }

    /// Number of `[?]` placeholders found by [`ExpressionParser::parse`]
    #[inline]
    pub fn predicate_count(&self) -> usize {
        self.predicate_slots
    }

    /// Tokenize the whole input, appending a trailing [`Token::EOF`]
    pub(crate) fn tokenize(&mut self) -> JsonPathResult<()> {
        use super::{characters, numbers, operators, strings};

        let chars: Vec<char> = self.input.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                ' ' | '\t' | '\n' | '\r' => {}
                '\'' | '"' => {
                    i = strings::parse_string_literal(self, &chars, i)?;
                }
                c if c.is_ascii_digit() || c == '-' => {
                    i = numbers::parse_number_literal(self, &chars, i)?;
                }
                '=' | '!' | '<' | '>' | '&' | '|' => {
                    i = operators::parse_operator(self, &chars, i)?;
                }
                _ => {
                    i = characters::parse_character_token(self, &chars, i)?;
                }
            }
            i += 1;
        }

        self.tokens.push_back(Token::EOF);
        Ok(())
    }

    /// Tokenize a standalone filter body such as `[?(@.a > 1)]` or `@.a > 1`
    pub(crate) fn tokenize_only(input: &str) -> JsonPathResult<VecDeque<Token>> {
        let mut parser = Self::new(input);
        parser.tokenize()?;
        Ok(parser.tokens)
    }
}
