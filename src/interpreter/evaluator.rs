/// Core evaluation logic and context management.
///
/// Contains the tree walker and the per-call binding context.
pub mod core;

/// Unary operator evaluation logic.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Implements `+ - * / ^` with plain IEEE-754 semantics.
pub mod binary;

/// Function registry and call evaluation.
///
/// Holds the static table of recognised functions, their arity and the
/// multi-argument allowlist, and evaluates calls against it.
pub mod function;

/// Bulk-mode detection.
///
/// Decides, per evaluation call, whether array-valued variables make the
/// expression run once per array index.
pub mod bulk;
