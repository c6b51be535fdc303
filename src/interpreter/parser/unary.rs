use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseErrorKind,
    interpreter::{
        evaluator::function::core::function_arity,
        lexer::{Operator, Token, TokenKind},
        parser::{
            core::{ParseContext, ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Negation binds looser
/// than `^` and tighter than `*` and `/`, so `-2^2` parses as `-(2^2)` while
/// `-2*3` parses as `(-2)*3`. Repeated signs such as `--a` are accepted, each
/// one counting as a nesting level.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | exponent
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>,
                                 ctx: ParseContext)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token { kind: TokenKind::Operator(Operator::Minus),
                        offset,
                        .. }) = tokens.peek()
    {
        let offset = *offset;
        tokens.next();
        let expr = parse_unary(tokens, ctx.descend(offset)?)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           offset })
    } else {
        parse_exponent(tokens, ctx)
    }
}

/// Parses exponentiation expressions.
///
/// `^` is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`. The exponent
/// is parsed as a unary expression so it may be negated, as in `2^-1`.
///
/// Grammar: `exponent := primary ("^" unary)?`
fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, ctx: ParseContext) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let base = parse_primary(tokens, ctx)?;

    if let Some(Token { kind: TokenKind::Operator(Operator::Caret),
                        offset,
                        .. }) = tokens.peek()
    {
        let offset = *offset;
        tokens.next();
        let exponent = parse_unary(tokens, ctx.descend(offset)?)?;
        return Ok(Expr::BinaryOp { left: Box::new(base),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   offset });
    }

    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar:
///
/// ```text
///     primary := NUMBER
///              | VARIABLE
///              | FUNCTION "(" arguments ")"
///              | "(" expression ")"
/// ```
///
/// An operator, `)` or `,` here means an operand is missing.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>, ctx: ParseContext) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = tokens.next().ok_or_else(|| ctx.end_of_input())?;

    match &token.kind {
        TokenKind::Number(value) => Ok(Expr::Number { value:  *value,
                                                      offset: token.offset, }),
        TokenKind::Variable(name) => Ok(Expr::Variable { name:   *name,
                                                         offset: token.offset, }),
        TokenKind::Function(name) => parse_function_call(tokens, name, token.offset, ctx),
        TokenKind::LeftParen => parse_grouping(tokens, token.offset, ctx),
        TokenKind::Operator(_) | TokenKind::RightParen | TokenKind::Comma => {
            Err(ParseErrorKind::UnexpectedToken { token:  token.text.clone(),
                                                  offset: token.offset, })
        },
    }
}

/// Parses the remainder of a parenthesized expression after its `(`.
///
/// The inner expression is returned as-is; grouping only affects the shape of
/// the tree.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         offset: usize,
                         ctx: ParseContext)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let expr = parse_expression(tokens, ctx.descend(offset)?)?;
    match tokens.next() {
        Some(Token { kind: TokenKind::RightParen,
                     .. }) => Ok(expr),
        Some(token) => Err(ParseErrorKind::UnexpectedToken { token:  token.text.clone(),
                                                             offset: token.offset, }),
        None => Err(ParseErrorKind::ExpectedClosingParen { offset }),
    }
}

/// Parses a function call after its name.
///
/// The name must be followed by a parenthesized, comma-separated argument
/// list. For recognised functions the number of written arguments is checked
/// against the function's class: single-argument functions take exactly one,
/// multi-argument functions take at least one and no more than their upper
/// bound. The lower bound of a multi-argument function is only known after
/// array arguments are spread, so it is checked during evaluation.
///
/// Unknown names are left for the evaluator to reject.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>,
                              name: &str,
                              offset: usize,
                              ctx: ParseContext)
                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.next() {
        Some(Token { kind: TokenKind::LeftParen,
                     offset: paren,
                     .. }) => {
            let inner = ctx.descend(*paren)?;
            let arguments =
                parse_comma_separated(tokens, |tokens| parse_expression(tokens, inner), *paren)?;

            if let Some(arity) = function_arity(name)
               && (arguments.is_empty() || !arity.admits_written(arguments.len()))
            {
                return Err(ParseErrorKind::ArityMismatch { name: name.to_string(),
                                                           expected: arity.to_string(),
                                                           found: arguments.len(),
                                                           offset });
            }

            Ok(Expr::FunctionCall { name: name.to_string(),
                                    arguments,
                                    offset })
        },
        _ => Err(ParseErrorKind::ExpectedArguments { name: name.to_string(),
                                                     offset }),
    }
}
