//! Slice notation (`[start:end:step]`)

use super::core::SelectorParser;
use crate::error::{JsonPathResult, invalid_expression_error};
use crate::jsonpath::{ast::JsonSelector, tokens::Token};

/// Parse the remainder of a slice; the parser is positioned on the first `:`
pub fn parse_slice(
    parser: &mut SelectorParser,
    start: Option<i64>,
) -> JsonPathResult<JsonSelector> {
    parser.expect_token(Token::Colon)?;
    let end = optional_integer(parser);

    let step = if matches!(parser.peek_token(), Some(Token::Colon)) {
        parser.consume_token();
        match optional_integer(parser) {
            Some(0) => {
                return Err(invalid_expression_error(
                    parser.input,
                    "slice step cannot be zero",
                    None,
                ));
            }
            other => other,
        }
    } else {
        None
    };

    Ok(JsonSelector::Slice { start, end, step })
}

fn optional_integer(parser: &mut SelectorParser) -> Option<i64> {
    if let Some(Token::Integer(n)) = parser.peek_token() {
        let n = *n;
        parser.consume_token();
        Some(n)
    } else {
        None
    }
}
