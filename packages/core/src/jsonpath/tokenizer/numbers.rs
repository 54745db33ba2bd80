//! Integer and floating-point literals

use super::core::ExpressionParser;
use crate::error::{JsonPathResult, invalid_expression_error};
use crate::jsonpath::tokens::Token;

pub(crate) fn parse_number_literal(
    parser: &mut ExpressionParser,
    chars: &[char],
    start: usize,
) -> JsonPathResult<usize> {
    let mut i = start;
    if chars[i] == '-' {
        i += 1;
    }

    let digit_start = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i == digit_start {
        return Err(invalid_expression_error(
            &parser.input,
            "'-' must be followed by digits",
            Some(start),
        ));
    }
    if i > digit_start + 1 && chars[digit_start] == '0' {
        return Err(invalid_expression_error(
            &parser.input,
            "integers cannot have leading zeros",
            Some(digit_start),
        ));
    }

    let mut is_float = false;
    if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
        is_float = true;
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }

    let text: String = chars[start..i].iter().collect();
    let token = if is_float {
        text.parse::<f64>().map(Token::Number).map_err(|_| {
            invalid_expression_error(&parser.input, "invalid floating point literal", Some(start))
        })?
    } else {
        text.parse::<i64>().map(Token::Integer).map_err(|_| {
            invalid_expression_error(&parser.input, "integer literal out of range", Some(start))
        })?
    };
    parser.tokens.push_back(token);
    Ok(i - 1)
}
