/// Parsing errors.
///
/// Defines the errors raised while tokenizing or parsing an expression string:
/// unknown characters, invalid identifiers, unbalanced parentheses, missing
/// operands and wrong function arity.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors raised while evaluating a parsed expression against a
/// set of variable bindings, such as unknown functions or arrays used where a
/// number is required.
pub mod evaluation_error;
/// Function node errors.
///
/// Errors raised by the host-facing [`crate::node::FunctionNode`] when a
/// variable input cannot be declared.
pub mod node_error;

pub use evaluation_error::EvaluationError;
pub use node_error::NodeError;
pub use parse_error::{ParseError, ParseErrorKind};

/// Any error produced by [`crate::evaluate`].
///
/// Parsing and evaluation are two distinct phases; this enum keeps the phase
/// visible to the caller so either one can be reported on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The expression text is malformed.
    Parse(ParseError),
    /// The expression is well formed but cannot be evaluated against the
    /// supplied bindings.
    Evaluation(EvaluationError),
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<EvaluationError> for Error {
    fn from(value: EvaluationError) -> Self {
        Self::Evaluation(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Evaluation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Evaluation(e) => Some(e),
        }
    }
}
