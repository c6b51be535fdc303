#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors raised when declaring a new variable input on a function node.
pub enum NodeError {
    /// The name was empty after trimming.
    EmptyVariableName,
    /// The name is not a single letter `a`..`z`.
    InvalidVariableName {
        /// The name as given.
        name: String,
    },
    /// An input with the same name already exists.
    VariableExists {
        /// The normalised name.
        name: char,
    },
}

impl std::fmt::Display for NodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyVariableName => write!(f, "Variable name is empty."),
            Self::InvalidVariableName { name } => write!(f,
                                                         "Only single character variables are allowed: '{name}'."),
            Self::VariableExists { name } => write!(f, "Variable '{name}' already exists."),
        }
    }
}

impl std::error::Error for NodeError {}
