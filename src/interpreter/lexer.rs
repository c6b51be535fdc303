use logos::Logos;

use crate::{
    error::ParseErrorKind,
    interpreter::{evaluator::function::core::is_function, parser::core::MAX_NESTING_DEPTH},
};

/// Raw lexical units recognised by the scanner before identifiers are
/// classified.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Variable or function names such as `x` or `sin`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// An arithmetic operator symbol.
///
/// `-` is both subtraction and negation; the parser decides which from its
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
}

/// The classified kind of a [`Token`], carrying its value where it has one.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A numeric literal and its parsed value.
    Number(f64),
    /// A single-letter variable.
    Variable(char),
    /// A function name. Recognised names and unknown names followed by `(`
    /// both land here; unknown names are rejected during evaluation.
    Function(String),
    /// An arithmetic operator.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
}

/// Represents a lexical token of an expression.
///
/// Tokens are immutable once produced and can be kept as long as the
/// expression string does not change.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind:   TokenKind,
    /// The exact source text of the token.
    pub text:   String,
    /// Byte offset of the token in the source.
    pub offset: usize,
}

impl TokenKind {
    /// Short lowercase name of the kind, used in listings and messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Variable(_) => "variable",
            Self::Function(_) => "function",
            Self::Operator(_) => "operator",
            Self::LeftParen => "left-paren",
            Self::RightParen => "right-paren",
            Self::Comma => "comma",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>4} {:<12} {}", self.offset, self.kind.name(), self.text)
    }
}

/// Converts an expression string into its token sequence.
///
/// Whitespace is skipped. Identifiers are classified here: a single lowercase
/// letter is a variable, a recognised name is a function, and an unknown
/// multi-letter name is accepted as a function only when it is immediately
/// followed by `(`. Parentheses must balance and may not nest deeper than
/// [`MAX_NESTING_DEPTH`].
///
/// # Errors
/// - `UnexpectedCharacter` for text no token starts with.
/// - `InvalidIdentifier` for names like `ab` or `X`.
/// - `UnmatchedClosingParen` / `ExpectedClosingParen` for unbalanced
///   parentheses.
/// - `NestingTooDeep` for parentheses nested past the limit.
///
/// # Example
/// ```
/// use exprnode::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("sin(a) + 2").unwrap();
/// assert_eq!(tokens[0].kind, TokenKind::Function("sin".to_string()));
/// assert_eq!(tokens[2].kind, TokenKind::Variable('a'));
/// assert_eq!(tokens[5].kind, TokenKind::Number(2.0));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseErrorKind> {
    let mut raw = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            raw.push((tok, lexer.span()));
        } else {
            return Err(ParseErrorKind::UnexpectedCharacter { token:  lexer.slice().to_string(),
                                                             offset: lexer.span().start, });
        }
    }

    let mut tokens = Vec::with_capacity(raw.len());
    let mut open_parens = Vec::new();

    for (i, (tok, span)) in raw.iter().enumerate() {
        let text = &source[span.clone()];
        let offset = span.start;
        let kind = match tok {
            RawToken::Number(n) => TokenKind::Number(*n),
            RawToken::Identifier => {
                let followed_by_paren = matches!(raw.get(i + 1), Some((RawToken::LParen, _)));
                classify_identifier(text, offset, followed_by_paren)?
            },
            RawToken::Plus => TokenKind::Operator(Operator::Plus),
            RawToken::Minus => TokenKind::Operator(Operator::Minus),
            RawToken::Star => TokenKind::Operator(Operator::Star),
            RawToken::Slash => TokenKind::Operator(Operator::Slash),
            RawToken::Caret => TokenKind::Operator(Operator::Caret),
            RawToken::LParen => {
                if open_parens.len() >= MAX_NESTING_DEPTH {
                    return Err(ParseErrorKind::NestingTooDeep { offset });
                }
                open_parens.push(offset);
                TokenKind::LeftParen
            },
            RawToken::RParen => {
                if open_parens.pop().is_none() {
                    return Err(ParseErrorKind::UnmatchedClosingParen { offset });
                }
                TokenKind::RightParen
            },
            RawToken::Comma => TokenKind::Comma,
        };
        tokens.push(Token { kind,
                            text: text.to_string(),
                            offset });
    }

    if let Some(&offset) = open_parens.last() {
        return Err(ParseErrorKind::ExpectedClosingParen { offset });
    }

    Ok(tokens)
}

/// Decides whether an identifier is a variable or a function name.
fn classify_identifier(text: &str,
                       offset: usize,
                       followed_by_paren: bool)
                       -> Result<TokenKind, ParseErrorKind> {
    let mut chars = text.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
       && c.is_ascii_lowercase()
    {
        return Ok(TokenKind::Variable(c));
    }

    if is_function(text) || (followed_by_paren && text.len() > 1) {
        return Ok(TokenKind::Function(text.to_string()));
    }

    Err(ParseErrorKind::InvalidIdentifier { name: text.to_string(),
                                            offset })
}
