#[derive(Debug, Clone, PartialEq, Eq)]
/// Describes what went wrong while tokenizing or parsing.
///
/// Offsets are byte offsets into the expression string.
pub enum ParseErrorKind {
    /// A character that cannot start any token.
    UnexpectedCharacter {
        /// The offending text.
        token:  String,
        /// Where the text starts.
        offset: usize,
    },
    /// An identifier that is neither a single lowercase letter nor a function
    /// name.
    InvalidIdentifier {
        /// The identifier as written.
        name:   String,
        /// Where the identifier starts.
        offset: usize,
    },
    /// A `)` with no matching `(`.
    UnmatchedClosingParen {
        /// Where the parenthesis is.
        offset: usize,
    },
    /// A `(` that is never closed.
    ExpectedClosingParen {
        /// Where the unclosed parenthesis is.
        offset: usize,
    },
    /// Found a token where an operand or a different token was required.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// Where the token starts.
        offset: usize,
    },
    /// Reached the end of input while an operand was still required.
    UnexpectedEndOfInput {
        /// Where the input ends, just past the last token.
        offset: usize,
    },
    /// Parentheses, signs, exponents or operator chains nested deeper than
    /// the parser accepts.
    NestingTooDeep {
        /// Where the level that crossed the limit starts.
        offset: usize,
    },
    /// A function name not followed by an argument list.
    ExpectedArguments {
        /// The function name.
        name:   String,
        /// Where the function name starts.
        offset: usize,
    },
    /// A recognised function called with an argument count its class does not
    /// allow.
    ArityMismatch {
        /// The function name.
        name:     String,
        /// Human readable description of the accepted counts.
        expected: String,
        /// The number of arguments written.
        found:    usize,
        /// Where the function name starts.
        offset:   usize,
    },
    /// Extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// Where the token starts.
        offset: usize,
    },
}

impl ParseErrorKind {
    /// Attaches the expression the error was found in.
    #[must_use]
    pub fn in_expression(self, expression: &str) -> ParseError {
        ParseError { kind:       self,
                     expression: expression.to_string(), }
    }

    /// Byte offset of the offending text.
    ///
    /// # Example
    /// ```
    /// use exprnode::parse;
    ///
    /// assert_eq!(parse("1 + ab").unwrap_err().kind.offset(), 4);
    /// assert_eq!(parse("1 +").unwrap_err().kind.offset(), 3);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { offset, .. }
            | Self::InvalidIdentifier { offset, .. }
            | Self::UnmatchedClosingParen { offset }
            | Self::ExpectedClosingParen { offset }
            | Self::UnexpectedToken { offset, .. }
            | Self::ExpectedArguments { offset, .. }
            | Self::ArityMismatch { offset, .. }
            | Self::UnexpectedTrailingTokens { offset, .. }
            | Self::UnexpectedEndOfInput { offset }
            | Self::NestingTooDeep { offset } => *offset,
        }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { token, offset } => {
                write!(f, "Unexpected character '{token}' at {offset}")
            },
            Self::InvalidIdentifier { name, offset } => write!(f,
                                                               "Invalid identifier '{name}' at {offset}: variables are single lowercase letters and '{name}' is not a known function"),
            Self::UnmatchedClosingParen { offset } => {
                write!(f, "Closing parenthesis ')' at {offset} has no matching '('")
            },
            Self::ExpectedClosingParen { offset } => {
                write!(f, "Parenthesis '(' at {offset} is never closed")
            },
            Self::UnexpectedToken { token, offset } => {
                write!(f, "Unexpected token '{token}' at {offset}")
            },
            Self::UnexpectedEndOfInput { offset } => {
                write!(f, "Unexpected end of input at {offset}, an operand is missing")
            },
            Self::NestingTooDeep { offset } => {
                write!(f, "Expression nests too deeply at {offset}")
            },
            Self::ExpectedArguments { name, offset } => {
                write!(f, "Function '{name}' at {offset} must be followed by '('")
            },
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  offset, } => write!(f,
                                                      "Function '{name}' at {offset} takes {expected} argument(s), found {found}"),
            Self::UnexpectedTrailingTokens { token, offset } => {
                write!(f, "Extra tokens after expression starting with '{token}' at {offset}")
            },
        }
    }
}

/// A malformed expression.
///
/// Carries the original expression text so the message can be shown to a
/// user without further context.
///
/// # Example
/// ```
/// use exprnode::parse;
///
/// let err = parse("ab+1").unwrap_err();
/// assert!(err.to_string().contains("'ab'"));
/// assert!(err.to_string().contains("ab+1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong.
    pub kind:       ParseErrorKind,
    /// The expression being parsed.
    pub expression: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {} in expression '{}'.", self.kind, self.expression)
    }
}

impl std::error::Error for ParseError {}
