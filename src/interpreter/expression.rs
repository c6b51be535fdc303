use std::{collections::BTreeSet, str::FromStr};

use crate::{
    ast::Expr,
    error::{EvaluationError, ParseError},
    interpreter::{
        evaluator::{
            bulk::bulk_iterations,
            core::{Context, EvalResult},
            function::core::resolve_functions,
        },
        lexer::{Token, TokenKind, tokenize},
        parser::core::parse_tokens,
        value::{Bindings, EvaluationResult},
    },
};

/// A parsed expression.
///
/// Holds the source text, its validated token sequence and the expression tree
/// built from them. An `Expression` never changes after parsing; evaluate it
/// as often as needed with new bindings, or parse a new one when the text
/// changes.
///
/// # Example
/// ```
/// use exprnode::{Bindings, EvaluationResult, Expression, Value};
///
/// let expression = Expression::parse("a*2 + 1").unwrap();
///
/// let mut bindings = Bindings::new();
/// bindings.insert('a', Value::Number(3.0));
/// assert_eq!(expression.evaluate(&bindings).unwrap(), EvaluationResult::Scalar(7.0));
///
/// bindings.insert('a', Value::from([1.0, 2.0]));
/// assert_eq!(expression.evaluate(&bindings).unwrap(), EvaluationResult::Bulk(vec![3.0, 5.0]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source:    String,
    tokens:    Vec<Token>,
    tree:      Expr,
    variables: BTreeSet<char>,
}

impl Expression {
    /// Tokenizes and parses an expression string.
    ///
    /// # Errors
    /// Returns a `ParseError` naming the offending text and the expression if
    /// the string is malformed.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let tokens = tokenize(source).map_err(|kind| kind.in_expression(source))?;
        let tree = parse_tokens(&tokens).map_err(|kind| kind.in_expression(source))?;

        let variables = tokens.iter()
                              .filter_map(|token| match token.kind {
                                  TokenKind::Variable(name) => Some(name),
                                  _ => None,
                              })
                              .collect();

        log::trace!("Parsed '{source}' into {} tokens", tokens.len());

        Ok(Self { source: source.to_string(),
                  tokens,
                  tree,
                  variables })
    }

    /// The expression text as given.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The token sequence.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The expression tree.
    #[must_use]
    pub const fn tree(&self) -> &Expr {
        &self.tree
    }

    /// The distinct variable names the expression references, sorted.
    #[must_use]
    pub const fn variables(&self) -> &BTreeSet<char> {
        &self.variables
    }

    /// Evaluates the expression against a binding table.
    ///
    /// Every called function is resolved first, so an unknown name is reported
    /// even when bulk mode ends up running zero iterations. Then the bulk
    /// iteration count is decided from the bindings: without bulk mode the
    /// result is a single number; with `N` iterations the tree is evaluated
    /// `N` times, iteration `i` reading element `i` of every array-valued
    /// variable.
    ///
    /// # Errors
    /// Returns an `EvaluationError` for unknown functions, argument count
    /// mismatches, arrays used where a number is required, or arrays shorter
    /// than the iteration count.
    pub fn evaluate(&self, bindings: &Bindings) -> Result<EvaluationResult, EvaluationError> {
        resolve_functions(self.tokens.iter().filter_map(|token| match &token.kind {
                                                  TokenKind::Function(name) => {
                                                      Some((name.as_str(), token.offset))
                                                  },
                                                  _ => None,
                                              }))?;

        match bulk_iterations(&self.tokens, &self.variables, bindings) {
            None => Context::new(bindings).eval(&self.tree)
                                          .map(EvaluationResult::Scalar),
            Some(iterations) => {
                log::debug!("Bulk evaluating '{}' over {iterations} iterations", self.source);

                (0..iterations).map(|i| Context::at_index(bindings, i).eval(&self.tree))
                               .collect::<EvalResult<Vec<_>>>()
                               .map(EvaluationResult::Bulk)
            },
        }
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
