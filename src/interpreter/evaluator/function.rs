/// Single-argument helpers and the remaining multi-argument functions.
pub mod builtin;
/// The `clamp` function implementation.
///
/// Restricts a value to a specified inclusive range.
pub mod clamp;
/// `min` and `max` function implementations.
///
/// Returns the minimum or maximum value from a list of arguments.
pub mod min_max;

pub mod core;
