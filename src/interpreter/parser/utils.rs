use std::iter::Peekable;

use crate::{
    error::ParseErrorKind,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Parses a comma-separated list of items up to and including the closing
/// `)`.
///
/// Used for function argument lists. It repeatedly calls `parse_item` to parse
/// one element, expecting either:
///
/// - a comma, to continue the list, or
/// - `)`, to end it.
///
/// An immediately encountered `)` produces an empty list; the caller decides
/// whether that is acceptable.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening `(`.
/// - `parse_item`: Function used to parse each list element.
/// - `open_offset`: Offset of the opening `(`, for error reporting.
///
/// # Errors
/// Returns a `ParseErrorKind` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    open_offset: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if let Some(Token { kind: TokenKind::RightParen,
                        .. }) = tokens.peek()
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(Token { kind: TokenKind::Comma,
                         .. }) => {},
            Some(Token { kind: TokenKind::RightParen,
                         .. }) => break,
            Some(token) => {
                return Err(ParseErrorKind::UnexpectedToken { token:  token.text.clone(),
                                                             offset: token.offset, });
            },
            None => return Err(ParseErrorKind::ExpectedClosingParen { offset: open_offset }),
        }
    }
    Ok(items)
}
