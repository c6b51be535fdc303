/// Parser entry points.
///
/// Starts parsing at the lowest precedence level and checks that the whole
/// token sequence was consumed.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level for `+ -` and `* /`, plus the mapping
/// from operator tokens to [`crate::ast::BinaryOperator`].
pub mod binary;

/// Unary, exponent and primary parsing.
///
/// Handles negation, right-associative `^`, literals, variables, grouping and
/// function calls.
pub mod unary;

pub mod utils;
