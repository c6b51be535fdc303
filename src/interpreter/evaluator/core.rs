use crate::{
    ast::Expr,
    error::EvaluationError,
    interpreter::value::{Bindings, Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Stores the state of a single evaluation pass.
///
/// A context borrows the variable bindings for one call and, in bulk mode,
/// the iteration index that selects one element from every array-valued
/// variable. It holds nothing else, so evaluating the same tree with the same
/// context always yields the same result.
pub struct Context<'b> {
    /// The variable bindings of this call.
    bindings: &'b Bindings,
    /// The bulk iteration index, or `None` for a single evaluation.
    index:    Option<usize>,
}

impl<'b> Context<'b> {
    /// Creates a context for a single (non-bulk) evaluation.
    #[must_use]
    pub const fn new(bindings: &'b Bindings) -> Self {
        Self { bindings,
               index: None }
    }

    /// Creates a context for bulk iteration `index`.
    #[must_use]
    pub const fn at_index(bindings: &'b Bindings, index: usize) -> Self {
        Self { bindings,
               index: Some(index) }
    }

    /// Returns the bindings this context evaluates against.
    #[must_use]
    pub const fn bindings(&self) -> &'b Bindings {
        self.bindings
    }

    /// Returns the bulk iteration index, if any.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    /// Evaluates an expression tree to a number.
    ///
    /// This is the main entry point for tree evaluation. It dispatches on the
    /// node kind: literals, variables, unary and binary operations, and
    /// function calls.
    ///
    /// # Example
    /// ```
    /// use exprnode::{
    ///     Bindings, Value,
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut bindings = Bindings::new();
    /// bindings.insert('a', Value::Number(4.0));
    ///
    /// let expr = Expr::BinaryOp { left:   Box::new(Expr::Variable { name:   'a',
    ///                                                               offset: 0, }),
    ///                             op:     BinaryOperator::Mul,
    ///                             right:  Box::new(Expr::Number { value:  2.5,
    ///                                                             offset: 2, }),
    ///                             offset: 1, };
    ///
    /// assert_eq!(Context::new(&bindings).eval(&expr).unwrap(), 10.0);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Variable { name, .. } => self.eval_variable(*name, expr.offset()),
            Expr::UnaryOp { op, expr, .. } => Ok(Self::eval_unary(*op, self.eval(expr)?)),
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_binary(*op, left, right))
            },
            Expr::FunctionCall { name, arguments, .. } => {
                self.eval_function_call(name, arguments, expr.offset())
            },
        }
    }

    /// Looks up a variable by name.
    ///
    /// - An unbound variable evaluates to `0`.
    /// - A number evaluates to itself.
    /// - An array evaluates to its element at the bulk iteration index. Outside
    ///   bulk mode an array cannot stand where a number is required.
    ///
    /// # Errors
    /// `ExpectedNumber` for an array outside bulk mode, `IndexOutOfRange` when
    /// the iteration index is past the end of the array. Both report `offset`,
    /// where the variable is used.
    pub fn eval_variable(&self, name: char, offset: usize) -> EvalResult<f64> {
        match self.bindings.get(&name) {
            None => Ok(0.0),
            Some(Value::Number(n)) => Ok(*n),
            Some(Value::Array(items)) => {
                let index = self.index
                                .ok_or(EvaluationError::ExpectedNumber { name, offset })?;
                items.get(index)
                     .copied()
                     .ok_or(EvaluationError::IndexOutOfRange { name,
                                                               index,
                                                               length: items.len(),
                                                               offset })
            },
        }
    }
}
