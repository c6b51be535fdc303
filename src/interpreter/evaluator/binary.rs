use crate::{ast::BinaryOperator, interpreter::evaluator::core::Context};

impl Context<'_> {
    /// Evaluates a binary operation between two numbers.
    ///
    /// Division follows IEEE-754: dividing by zero yields an infinity or NaN
    /// rather than an error. `^` uses `powf`.
    ///
    /// # Example
    /// ```
    /// use exprnode::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Pow, 2.0, 10.0), 1024.0);
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Pow => left.powf(right),
        }
    }
}
