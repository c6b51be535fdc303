//! # exprnode
//!
//! exprnode is the expression engine behind a visual-programming function
//! node. It parses math expressions over single-letter variables, such as
//! `a*sin(a^2)+cos(a*tan(a))`, and evaluates them either once or, when a
//! variable is bound to an array, once per array element ("bulk evaluation").

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The tree is built by the parser with precedence
/// already applied and traversed by the evaluator.
pub mod ast;
/// Provides the error types for parsing, evaluation and the function node.
///
/// # Responsibilities
/// - Defines one error enum per failure family.
/// - Attaches offsets and the original expression for diagnostics.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// This module ties together the lexer, parser, evaluator and value types and
/// exposes the [`interpreter::expression::Expression`] type that callers parse
/// once and evaluate many times.
pub mod interpreter;
/// Host-facing function node.
///
/// Wraps an expression with its variable inputs and last-known-good output,
/// the way a flow-graph host consumes it.
pub mod node;

pub use error::{Error, EvaluationError, NodeError, ParseError};
pub use interpreter::{
    evaluator::function::core::{
        MULTIARG_FUNCTIONS, SINGLE_ARG_FUNCTIONS, is_function, is_multiarg_function,
    },
    expression::Expression,
    lexer::{Token, TokenKind},
    value::{Bindings, EvaluationResult, Value},
};

/// Tokenizes and validates an expression, returning its token sequence.
///
/// The whole expression is checked, including operator placement and
/// function arity, so a successful result is always evaluable syntax.
///
/// # Errors
/// Returns a `ParseError` if the expression is malformed.
///
/// # Examples
/// ```
/// use exprnode::{TokenKind, parse};
///
/// let tokens = parse("sin(a) * 2").unwrap();
/// assert_eq!(tokens.len(), 6);
/// assert_eq!(tokens[2].kind, TokenKind::Variable('a'));
///
/// assert!(parse("sin(a").is_err());
/// ```
pub fn parse(expression: &str) -> Result<Vec<Token>, ParseError> {
    Expression::parse(expression).map(|e| e.tokens().to_vec())
}

/// Parses and evaluates an expression against a binding table.
///
/// # Errors
/// Returns `Error::Parse` if the expression is malformed and
/// `Error::Evaluation` if it cannot be evaluated with these bindings.
///
/// # Examples
/// ```
/// use exprnode::{Bindings, EvaluationResult, Value, evaluate};
///
/// let result = evaluate("2+3*4", &Bindings::new()).unwrap();
/// assert_eq!(result, EvaluationResult::Scalar(14.0));
///
/// let mut bindings = Bindings::new();
/// bindings.insert('a', Value::from([1.0, 2.0, 3.0]));
/// let result = evaluate("a+1", &bindings).unwrap();
/// assert_eq!(result, EvaluationResult::Bulk(vec![2.0, 3.0, 4.0]));
/// ```
pub fn evaluate(expression: &str, bindings: &Bindings) -> Result<EvaluationResult, Error> {
    Ok(Expression::parse(expression)?.evaluate(bindings)?)
}
