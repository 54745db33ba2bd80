//! Quoted string literals with escape handling

use super::core::ExpressionParser;
use crate::error::{JsonPathResult, invalid_expression_error};
use crate::jsonpath::tokens::Token;

/// Parse a single- or double-quoted literal, returning the index of the closing quote
pub(crate) fn parse_string_literal(
    parser: &mut ExpressionParser,
    chars: &[char],
    start: usize,
) -> JsonPathResult<usize> {
    let quote = chars[start];
    let mut i = start + 1;
    let mut value = String::new();

    while i < chars.len() && chars[i] != quote {
        if chars[i] == '\\' {
            i += 1;
            let Some(&escaped) = chars.get(i) else {
                break;
            };
            match escaped {
                '"' | '\'' | '\\' | '/' => value.push(escaped),
                'b' => value.push('\u{0008}'),
                'f' => value.push('\u{000C}'),
                'n' => value.push('\n'),
                'r' => value.push('\r'),
                't' => value.push('\t'),
                'u' => {
                    let hex: String = chars.iter().skip(i + 1).take(4).collect();
                    let decoded = u32::from_str_radix(&hex, 16)
                        .ok()
                        .filter(|_| hex.len() == 4)
                        .and_then(char::from_u32)
                        .ok_or_else(|| {
                            invalid_expression_error(
                                &parser.input,
                                "invalid \\u escape sequence",
                                Some(i),
                            )
                        })?;
                    value.push(decoded);
                    i += 4;
                }
                _ => {
                    return Err(invalid_expression_error(
                        &parser.input,
                        format!("invalid escape sequence '\\{escaped}'"),
                        Some(i),
                    ));
                }
            }
        } else {
            value.push(chars[i]);
        }
        i += 1;
    }

    if i >= chars.len() {
        return Err(invalid_expression_error(
            &parser.input,
            "unterminated string literal",
            Some(start),
        ));
    }

    parser.tokens.push_back(Token::String(value));
    Ok(i)
}
