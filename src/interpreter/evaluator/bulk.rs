use std::collections::BTreeSet;

use crate::interpreter::{
    evaluator::function::core::is_multiarg_function,
    lexer::{Token, TokenKind},
    value::{Bindings, Value},
};

/// Collects the names of the functions `variable` is the sole argument of.
///
/// Matches every occurrence of `f(v)`, i.e. a function token, `(`, the
/// variable and `)` in a row. Calls where the variable shares the argument
/// list, as in `max(v, 1)`, or is nested, as in `sin(v+1)`, do not match.
///
/// # Example
/// ```
/// use exprnode::interpreter::{evaluator::bulk::sole_argument_calls, lexer::tokenize};
///
/// let tokens = tokenize("sin(t) + max(t) * max(t, 2)").unwrap();
/// assert_eq!(sole_argument_calls(&tokens, 't'), vec!["sin", "max"]);
/// ```
#[must_use]
pub fn sole_argument_calls(tokens: &[Token], variable: char) -> Vec<&str> {
    tokens.windows(4)
          .filter_map(|window| match window {
              [Token { kind: TokenKind::Function(name),
                       .. },
               Token { kind: TokenKind::LeftParen,
                       .. },
               Token { kind: TokenKind::Variable(v),
                       .. },
               Token { kind: TokenKind::RightParen,
                       .. }] if *v == variable => Some(name.as_str()),
              _ => None,
          })
          .collect()
}

/// Decides how many bulk iterations an evaluation call runs.
///
/// Every variable of the expression that is bound to an array is checked:
/// when none of its sole-argument calls `f(v)` names a multi-argument function
/// (which is vacuously the case when there are no such calls), the variable's
/// array length is a candidate. The iteration count is the largest candidate.
///
/// Returns `None` when no variable qualifies; the expression is then
/// evaluated once.
///
/// # Example
/// ```
/// use exprnode::{
///     Bindings, Value,
///     interpreter::{evaluator::bulk::bulk_iterations, lexer::tokenize},
/// };
///
/// let mut bindings = Bindings::new();
/// bindings.insert('a', Value::from([1.0, 2.0, 3.0]));
///
/// let tokens = tokenize("a + 1").unwrap();
/// assert_eq!(bulk_iterations(&tokens, &['a'].into(), &bindings), Some(3));
///
/// let tokens = tokenize("max(a)").unwrap();
/// assert_eq!(bulk_iterations(&tokens, &['a'].into(), &bindings), None);
/// ```
#[must_use]
pub fn bulk_iterations(tokens: &[Token],
                       variables: &BTreeSet<char>,
                       bindings: &Bindings)
                       -> Option<usize> {
    let mut iterations: Option<usize> = None;

    for name in variables {
        let Some(length) = bindings.get(name).and_then(Value::len) else {
            continue;
        };

        let calls = sole_argument_calls(tokens, *name);
        let only_single_arg = calls.iter().all(|f| !is_multiarg_function(f));

        log::debug!("Array variable '{name}' of length {length} used as sole argument of {calls:?}, bulk: {only_single_arg}");

        if only_single_arg {
            iterations = Some(iterations.map_or(length, |n| n.max(length)));
        }
    }

    iterations
}
