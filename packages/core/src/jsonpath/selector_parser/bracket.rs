//! Bracket selectors: names, indices, slices, wildcards, filters, placeholders and unions

use super::core::SelectorParser;
use crate::error::{JsonPathResult, invalid_expression_error};
use crate::jsonpath::{ast::JsonSelector, filter_parser::FilterParser, tokens::Token};

/// Parse the inside of `[...]`; the opening bracket is already consumed
pub fn parse_bracket_selector(parser: &mut SelectorParser) -> JsonPathResult<JsonSelector> {
    if matches!(parser.peek_token(), Some(Token::Question)) {
        parser.consume_token();
        if matches!(parser.peek_token(), Some(Token::RightBracket)) {
            parser.consume_token();
            let slot = *parser.predicate_slots;
            *parser.predicate_slots += 1;
            return Ok(JsonSelector::Predicate { slot });
        }
        let expression = {
            let mut filter_parser =
                FilterParser::new(parser.tokens, parser.input, parser.predicate_slots);
            filter_parser.parse_filter_expression()?
        };
        parser.expect_token(Token::RightBracket)?;
        return Ok(JsonSelector::Filter { expression });
    }

    let mut selectors = vec![parse_union_member(parser)?];
    while matches!(parser.peek_token(), Some(Token::Comma)) {
        parser.consume_token();
        selectors.push(parse_union_member(parser)?);
    }
    parser.expect_token(Token::RightBracket)?;

    if selectors.len() == 1 {
        Ok(selectors.remove(0))
    } else {
        Ok(JsonSelector::Union { selectors })
    }
}

/// One comma separated member of a bracket: name, index, slice or wildcard
fn parse_union_member(parser: &mut SelectorParser) -> JsonPathResult<JsonSelector> {
    match parser.consume_token() {
        Some(Token::Star) => Ok(JsonSelector::Wildcard),
        Some(Token::String(name)) => Ok(JsonSelector::Child { name }),
        Some(Token::Integer(index)) => {
            if matches!(parser.peek_token(), Some(Token::Colon)) {
                super::slice::parse_slice(parser, Some(index))
            } else {
                Ok(JsonSelector::Index { index })
            }
        }
        Some(Token::Colon) => {
            parser.tokens.push_front(Token::Colon);
            super::slice::parse_slice(parser, None)
        }
        Some(Token::At) => Err(invalid_expression_error(
            parser.input,
            "'@' is only valid inside filter expressions [?...]",
            None,
        )),
        _ => Err(invalid_expression_error(
            parser.input,
            "expected name, index, slice, filter or '*' inside brackets",
            None,
        )),
    }
}
