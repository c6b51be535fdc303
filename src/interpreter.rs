/// The evaluator module computes results from expression trees.
///
/// The evaluator walks the tree built by the parser against a table of
/// variable bindings, applies operators and builtin functions, and decides per
/// call whether array-valued variables turn the evaluation into a bulk run.
///
/// # Responsibilities
/// - Evaluates tree nodes with IEEE-754 arithmetic.
/// - Owns the builtin function registry and the multi-argument allowlist.
/// - Detects bulk mode and iterates over array elements.
pub mod evaluator;
/// The expression module ties tokens, tree and evaluation together.
///
/// An [`expression::Expression`] is parsed once and evaluated many times.
pub mod expression;
/// The lexer module tokenizes expression strings.
///
/// The lexer reads the raw text and produces typed tokens: numbers,
/// single-letter variables, function names, operators, parentheses and commas.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input text into tokens with kind, text and offset.
/// - Classifies identifiers as variables or function names.
/// - Reports unknown characters, invalid identifiers and unbalanced
///   parentheses.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser imposes operator precedence and associativity so that the
/// evaluator never has to re-derive them.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Expr`] nodes.
/// - Reports missing operands, malformed calls and wrong arity.
pub mod parser;
/// The value module defines variable values and evaluation results.
pub mod value;
