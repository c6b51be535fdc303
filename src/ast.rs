/// An abstract syntax tree (AST) node representing an expression.
///
/// The parser builds this tree with operator precedence already applied, so
/// the evaluator only has to walk it. Every node records the byte offset of
/// the token it was built from.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value:  f64,
        /// Byte offset in the source.
        offset: usize,
    },
    /// Reference to a single-letter variable.
    Variable {
        /// Name of the variable.
        name:   char,
        /// Byte offset in the source.
        offset: usize,
    },
    /// A unary operation.
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// Byte offset in the source.
        offset: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Byte offset of the operator in the source.
        offset: usize,
    },
    /// Function call expression (e.g. `sin(x)` or `max(a, b)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Byte offset in the source.
        offset:    usize,
    },
}

impl Expr {
    /// Gets the source offset from `self`.
    /// ## Example
    /// ```
    /// use exprnode::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:   'x',
    ///                             offset: 5, };
    ///
    /// assert_eq!(expr.offset(), 5);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Number { offset, .. }
            | Self::Variable { offset, .. }
            | Self::UnaryOp { offset, .. }
            | Self::BinaryOp { offset, .. }
            | Self::FunctionCall { offset, .. } => *offset,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}
