//! Single-character tokens, identifiers and keywords

use super::core::ExpressionParser;
use crate::error::{JsonPathResult, invalid_expression_error};
use crate::jsonpath::tokens::Token;

/// Push the token starting at `i`, returning the index of its last character
pub(crate) fn parse_character_token(
    parser: &mut ExpressionParser,
    chars: &[char],
    i: usize,
) -> JsonPathResult<usize> {
    let token = match chars[i] {
        '$' => Token::Root,
        '@' => Token::At,
        '.' => {
            if chars.get(i + 1) == Some(&'.') {
                if chars.get(i + 2) == Some(&'.') {
                    return Err(invalid_expression_error(
                        &parser.input,
                        "'...' is not a valid segment, use '..' for recursive descent",
                        Some(i),
                    ));
                }
                parser.tokens.push_back(Token::DoubleDot);
                return Ok(i + 1);
            }
            Token::Dot
        }
        '[' => Token::LeftBracket,
        ']' => Token::RightBracket,
        '(' => Token::LeftParen,
        ')' => Token::RightParen,
        ',' => Token::Comma,
        ':' => Token::Colon,
        '?' => Token::Question,
        '*' => Token::Star,
        c if c.is_alphabetic() || c == '_' => return parse_identifier(parser, chars, i),
        other => {
            return Err(invalid_expression_error(
                &parser.input,
                format!("unexpected character '{other}'"),
                Some(i),
            ));
        }
    };
    parser.tokens.push_back(token);
    Ok(i)
}

fn parse_identifier(
    parser: &mut ExpressionParser,
    chars: &[char],
    start: usize,
) -> JsonPathResult<usize> {
    let mut end = start;
    while end < chars.len() && (chars[end].is_alphanumeric() || chars[end] == '_') {
        end += 1;
    }
    let identifier: String = chars[start..end].iter().collect();

    let token = match identifier.as_str() {
        "true" => Token::True,
        "false" => Token::False,
        "null" => Token::Null,
        _ => Token::Identifier(identifier),
    };
    parser.tokens.push_back(token);
    Ok(end - 1)
}
