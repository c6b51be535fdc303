/// Returns the largest of the values.
///
/// NaN values are ignored unless every value is NaN.
///
/// # Example
/// ```
/// use exprnode::interpreter::evaluator::function::min_max::max;
///
/// assert_eq!(max(&[3.0, 7.0, -1.0]), 7.0);
/// ```
#[must_use]
pub fn max(args: &[f64]) -> f64 {
    args.iter().copied().fold(f64::NAN, f64::max)
}

/// Returns the smallest of the values.
///
/// NaN values are ignored unless every value is NaN.
///
/// # Example
/// ```
/// use exprnode::interpreter::evaluator::function::min_max::min;
///
/// assert_eq!(min(&[3.0, 7.0, -1.0]), -1.0);
/// ```
#[must_use]
pub fn min(args: &[f64]) -> f64 {
    args.iter().copied().fold(f64::NAN, f64::min)
}
