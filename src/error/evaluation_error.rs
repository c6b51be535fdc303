#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a parsed expression.
///
/// Every variant records the byte offset of the call or variable it was raised
/// at.
pub enum EvaluationError {
    /// Called a function that is not in the registry.
    UnknownFunction {
        /// The name of the function.
        name:   String,
        /// Where the call starts.
        offset: usize,
    },
    /// A function received no values at all, e.g. `max(v)` with an empty
    /// array bound to `v`.
    MissingOperand {
        /// The name of the function.
        name:   String,
        /// Where the call starts.
        offset: usize,
    },
    /// The wrong number of values was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Human readable description of the accepted counts.
        expected: String,
        /// The number of values supplied.
        found:    usize,
        /// Where the call starts.
        offset:   usize,
    },
    /// An array-valued variable was used where a single number is required.
    ExpectedNumber {
        /// The name of the variable.
        name:   char,
        /// Where the variable is used.
        offset: usize,
    },
    /// Bulk evaluation read past the end of an array-valued variable.
    IndexOutOfRange {
        /// The name of the variable.
        name:   char,
        /// The iteration index.
        index:  usize,
        /// The length of the array bound to the variable.
        length: usize,
        /// Where the variable is used.
        offset: usize,
    },
}

impl EvaluationError {
    /// Byte offset of the call or variable the error was raised at.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnknownFunction { offset, .. }
            | Self::MissingOperand { offset, .. }
            | Self::ArgumentCountMismatch { offset, .. }
            | Self::ExpectedNumber { offset, .. }
            | Self::IndexOutOfRange { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFunction { name, offset } => {
                write!(f, "Evaluation error: Unknown function '{name}' at {offset}.")
            },
            Self::MissingOperand { name, offset } => {
                write!(f, "Evaluation error: Function '{name}' at {offset} received no operands.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          offset, } => write!(f,
                                                              "Evaluation error: Function '{name}' at {offset} takes {expected} argument(s), but received {found}."),
            Self::ExpectedNumber { name, offset } => write!(f,
                                                            "Evaluation error: Variable '{name}' at {offset} holds an array where a number is expected."),
            Self::IndexOutOfRange { name,
                                    index,
                                    length,
                                    offset, } => write!(f,
                                                        "Evaluation error: Index {index} is out of range for variable '{name}' at {offset} of length {length}."),
        }
    }
}

impl std::error::Error for EvaluationError {}
