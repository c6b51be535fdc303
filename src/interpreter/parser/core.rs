use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseErrorKind,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseErrorKind>;

/// Deepest nesting the parser accepts.
///
/// Every parenthesis, function argument list, sign, exponent and chained
/// binary operator counts as one level. Parsing and evaluation recurse per
/// level, so the limit keeps both well inside the stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Per-level parser state.
///
/// Carries the current nesting depth down the precedence levels, and where the
/// input ends so a missing operand can be located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseContext {
    depth: usize,
    end:   usize,
}

impl ParseContext {
    /// Creates the top-level context for input ending at byte offset `end`.
    #[must_use]
    pub const fn new(end: usize) -> Self {
        Self { depth: 0,
               end }
    }

    /// The current nesting depth.
    #[must_use]
    pub const fn depth(self) -> usize {
        self.depth
    }

    /// Enters one nesting level opened by the token at `offset`.
    ///
    /// # Errors
    /// `NestingTooDeep` once [`MAX_NESTING_DEPTH`] levels are open.
    ///
    /// # Example
    /// ```
    /// use exprnode::interpreter::parser::core::{MAX_NESTING_DEPTH, ParseContext};
    ///
    /// let mut ctx = ParseContext::new(0);
    /// for offset in 0..MAX_NESTING_DEPTH {
    ///     ctx = ctx.descend(offset).unwrap();
    /// }
    /// assert_eq!(ctx.depth(), MAX_NESTING_DEPTH);
    /// assert!(ctx.descend(MAX_NESTING_DEPTH).is_err());
    /// ```
    pub const fn descend(self, offset: usize) -> ParseResult<Self> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseErrorKind::NestingTooDeep { offset });
        }
        Ok(Self { depth: self.depth + 1,
                  end:   self.end, })
    }

    /// The error for input that stops where an operand was required.
    #[must_use]
    pub const fn end_of_input(self) -> ParseErrorKind {
        ParseErrorKind::UnexpectedEndOfInput { offset: self.end }
    }
}

/// Parses a full expression.
///
/// This is the recursive entry point used for the top level, for grouped
/// sub-expressions and for function arguments. It begins at the lowest
/// precedence level, addition, and descends through the hierarchy.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               ctx: ParseContext)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_additive(tokens, ctx)
}

/// Parses a complete token sequence into a single expression tree.
///
/// Fails when tokens remain after the expression, e.g. `a b` or `1 2`.
///
/// # Example
/// ```
/// use exprnode::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::core::parse_tokens},
/// };
///
/// let tokens = tokenize("2+3*4").unwrap();
/// let Expr::BinaryOp { op, .. } = parse_tokens(&tokens).unwrap() else {
///     panic!("expected a binary operation");
/// };
/// assert_eq!(op, BinaryOperator::Add);
/// ```
pub fn parse_tokens(tokens: &[Token]) -> ParseResult<Expr> {
    let end = tokens.last().map_or(0, |token| token.offset + token.text.len());
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, ParseContext::new(end))?;

    if let Some(token) = iter.next() {
        return Err(ParseErrorKind::UnexpectedTrailingTokens { token:  token.text.clone(),
                                                              offset: token.offset, });
    }

    Ok(expr)
}
