use std::collections::HashMap;

/// The value bound to a variable for one evaluation call.
///
/// A variable either carries a single number or an ordered array of numbers.
/// Array values are what trigger bulk evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single number.
    Number(f64),
    /// An ordered array of numbers.
    Array(Vec<f64>),
}

/// The variable-binding table: one entry per single-letter variable name.
///
/// Variables used by an expression but missing from the table evaluate as
/// `0`.
pub type Bindings = HashMap<char, Value>;

impl Value {
    /// Returns the array length, or `None` for a number.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Number(_) => None,
            Self::Array(items) => Some(items.len()),
        }
    }

    /// Returns `true` if this is an empty array.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Vec<f64>> for Value {
    fn from(value: Vec<f64>) -> Self {
        Self::Array(value)
    }
}

impl From<&[f64]> for Value {
    fn from(value: &[f64]) -> Self {
        Self::Array(value.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(value: [f64; N]) -> Self {
        Self::Array(value.to_vec())
    }
}

/// Formats a list of numbers as `[x, y, z]`.
fn fmt_list(f: &mut std::fmt::Formatter<'_>, items: &[f64]) -> std::fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Array(items) => fmt_list(f, items),
        }
    }
}

/// The outcome of one evaluation call.
///
/// Whether a call produces one number or one number per bulk iteration is
/// decided per call from the bindings, not fixed per expression.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationResult {
    /// A single evaluation.
    Scalar(f64),
    /// One result per bulk iteration index.
    Bulk(Vec<f64>),
}

impl EvaluationResult {
    /// Returns the number of a scalar result.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(n) => Some(*n),
            Self::Bulk(_) => None,
        }
    }

    /// Returns the numbers of a bulk result.
    #[must_use]
    pub fn as_bulk(&self) -> Option<&[f64]> {
        match self {
            Self::Scalar(_) => None,
            Self::Bulk(items) => Some(items),
        }
    }
}

impl From<EvaluationResult> for Value {
    fn from(value: EvaluationResult) -> Self {
        match value {
            EvaluationResult::Scalar(n) => Self::Number(n),
            EvaluationResult::Bulk(items) => Self::Array(items),
        }
    }
}

impl std::fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(n) => write!(f, "{n}"),
            Self::Bulk(items) => fmt_list(f, items),
        }
    }
}
