use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Operator, Token, TokenKind},
        parser::{
            core::{ParseContext, ParseResult},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `2-3-4` is
/// `(2-3)-4`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// Each operator in the chain deepens the tree by one, so it counts as a
/// nesting level.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `ctx`: Nesting state of the enclosing level.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                             mut ctx: ParseContext)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_multiplicative(tokens, ctx)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let offset = token.offset;
            tokens.next();
            ctx = ctx.descend(offset)?;
            let right = parse_multiplicative(tokens, ctx)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    offset };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`. Operands are unary
/// expressions, so `2*-3` is accepted.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   mut ctx: ParseContext)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_unary(tokens, ctx)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let offset = token.offset;
            tokens.next();
            ctx = ctx.descend(offset)?;
            let right = parse_unary(tokens, ctx)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    offset };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not one of `+ - * / ^`.
///
/// # Example
/// ```
/// use exprnode::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::{Operator, Token, TokenKind},
///         parser::binary::token_to_binary_operator,
///     },
/// };
///
/// let plus = Token { kind:   TokenKind::Operator(Operator::Plus),
///                    text:   "+".to_string(),
///                    offset: 0, };
///
/// assert_eq!(token_to_binary_operator(&plus), Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token.kind {
        TokenKind::Operator(Operator::Plus) => Some(BinaryOperator::Add),
        TokenKind::Operator(Operator::Minus) => Some(BinaryOperator::Sub),
        TokenKind::Operator(Operator::Star) => Some(BinaryOperator::Mul),
        TokenKind::Operator(Operator::Slash) => Some(BinaryOperator::Div),
        TokenKind::Operator(Operator::Caret) => Some(BinaryOperator::Pow),
        _ => None,
    }
}
