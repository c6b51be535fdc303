/// Returns the sign of a number: `-1`, `0` or `1`.
///
/// Unlike [`f64::signum`], zero maps to zero. NaN stays NaN.
///
/// # Example
/// ```
/// use exprnode::interpreter::evaluator::function::builtin::sign;
///
/// assert_eq!(sign(-42.0), -1.0);
/// assert_eq!(sign(0.0), 0.0);
/// assert_eq!(sign(3.5), 1.0);
/// ```
#[must_use]
pub fn sign(x: f64) -> f64 {
    if x == 0.0 || x.is_nan() { x } else { x.signum() }
}

/// Raises the first value to the power of the second.
#[must_use]
pub fn pow(args: &[f64]) -> f64 {
    args[0].powf(args[1])
}

/// Four-quadrant arctangent of `y = args[0]` and `x = args[1]`.
#[must_use]
pub fn atan2(args: &[f64]) -> f64 {
    args[0].atan2(args[1])
}

/// Euclidean norm of all values.
///
/// # Example
/// ```
/// use exprnode::interpreter::evaluator::function::builtin::hypot;
///
/// assert_eq!(hypot(&[3.0, 4.0]), 5.0);
/// ```
#[must_use]
pub fn hypot(args: &[f64]) -> f64 {
    args.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Arithmetic mean of all values.
///
/// # Example
/// ```
/// use exprnode::interpreter::evaluator::function::builtin::avg;
///
/// assert_eq!(avg(&[1.0, 2.0, 6.0]), 3.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn avg(args: &[f64]) -> f64 {
    args.iter().sum::<f64>() / args.len() as f64
}
