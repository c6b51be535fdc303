/// Clamps `args[0]` between a lower bound `args[1]` and an upper bound
/// `args[2]`.
///
/// Computed as `min(max(x, lo), hi)`, so an inverted range returns the upper
/// bound instead of failing.
///
/// # Example
/// ```
/// use exprnode::interpreter::evaluator::function::clamp::clamp;
///
/// assert_eq!(clamp(&[5.0, 0.0, 3.0]), 3.0);
/// assert_eq!(clamp(&[-2.0, 0.0, 3.0]), 0.0);
/// assert_eq!(clamp(&[1.5, 0.0, 3.0]), 1.5);
/// ```
#[must_use]
pub fn clamp(args: &[f64]) -> f64 {
    args[0].max(args[1]).min(args[2])
}
