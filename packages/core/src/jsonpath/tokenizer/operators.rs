//! Comparison and logical operators

use super::core::ExpressionParser;
use crate::error::{JsonPathResult, invalid_expression_error};
use crate::jsonpath::tokens::Token;

pub(crate) fn parse_operator(
    parser: &mut ExpressionParser,
    chars: &[char],
    i: usize,
) -> JsonPathResult<usize> {
    let next = chars.get(i + 1).copied();
    let (token, width) = match (chars[i], next) {
        ('=', Some('=')) => (Token::Equal, 2),
        ('!', Some('=')) => (Token::NotEqual, 2),
        ('<', Some('=')) => (Token::LessEq, 2),
        ('<', _) => (Token::Less, 1),
        ('>', Some('=')) => (Token::GreaterEq, 2),
        ('>', _) => (Token::Greater, 1),
        ('&', Some('&')) => (Token::LogicalAnd, 2),
        ('|', Some('|')) => (Token::LogicalOr, 2),
        ('=', _) => {
            return Err(invalid_expression_error(
                &parser.input,
                "single '=' is not an operator, use '==' for equality",
                Some(i),
            ));
        }
        (other, _) => {
            return Err(invalid_expression_error(
                &parser.input,
                format!("incomplete operator starting with '{other}'"),
                Some(i),
            ));
        }
    };
    parser.tokens.push_back(token);
    Ok(i + width - 1)
}
