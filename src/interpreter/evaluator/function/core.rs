use crate::{
    ast::Expr,
    error::EvaluationError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{builtin, clamp, min_max},
        },
        value::Value,
    },
};

/// Specifies the allowed number of values for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` values.
/// - `AtLeast(n)` means the builtin accepts `n` or more values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given number of values satisfies this arity.
    #[must_use]
    pub const fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::AtLeast(m) => n >= *m,
        }
    }

    /// Tests whether `n` written arguments can still satisfy this arity once
    /// array arguments are spread. Spreading only adds values, so only the
    /// upper bound applies.
    #[must_use]
    pub const fn admits_written(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n <= *m,
            Self::AtLeast(_) => true,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "exactly {n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Implementation of a builtin.
#[derive(Clone, Copy)]
enum Builtin {
    /// Takes exactly one number.
    Single(fn(f64) -> f64),
    /// Takes the values of all arguments after spreading.
    Multi(fn(&[f64]) -> f64),
}

/// Defines builtin functions by generating a lookup table and the name lists.
///
/// Single-argument functions are listed with their implementation only;
/// multi-argument functions carry an arity.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `SINGLE_ARG_FUNCTIONS` and `MULTIARG_FUNCTIONS` (public name lists).
macro_rules! builtin_functions {
    (
        single {
            $($single:literal => $single_fn:expr),* $(,)?
        }
        multi {
            $(
                $multi:literal => {
                    arity: $arity:expr,
                    func: $multi_fn:expr $(,)?
                }
            ),* $(,)?
        }
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  Builtin,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $single, arity: Arity::Exact(1), func: Builtin::Single($single_fn) },
            )*
            $(
                BuiltinDef { name: $multi, arity: $arity, func: Builtin::Multi($multi_fn) },
            )*
        ];
        /// Names of the recognised single-argument functions.
        pub const SINGLE_ARG_FUNCTIONS: &[&str] = &[
            $($single,)*
        ];
        /// The multi-argument allowlist. A function named here may take more
        /// than one argument and spreads array-valued variable arguments.
        pub const MULTIARG_FUNCTIONS: &[&str] = &[
            $($multi,)*
        ];
    };
}

builtin_functions! {
    single {
        "sin"   => f64::sin,
        "cos"   => f64::cos,
        "tan"   => f64::tan,
        "asin"  => f64::asin,
        "acos"  => f64::acos,
        "atan"  => f64::atan,
        "sinh"  => f64::sinh,
        "cosh"  => f64::cosh,
        "tanh"  => f64::tanh,
        "asinh" => f64::asinh,
        "acosh" => f64::acosh,
        "atanh" => f64::atanh,
        "sqrt"  => f64::sqrt,
        "cbrt"  => f64::cbrt,
        "exp"   => f64::exp,
        "ln"    => f64::ln,
        "log"   => f64::log10,
        "log2"  => f64::log2,
        "abs"   => f64::abs,
        "floor" => f64::floor,
        "ceil"  => f64::ceil,
        "round" => f64::round,
        "trunc" => f64::trunc,
        "sign"  => builtin::sign,
    }
    multi {
        "max"   => { arity: Arity::AtLeast(1), func: min_max::max },
        "min"   => { arity: Arity::AtLeast(1), func: min_max::min },
        "hypot" => { arity: Arity::AtLeast(1), func: builtin::hypot },
        "avg"   => { arity: Arity::AtLeast(1), func: builtin::avg },
        "pow"   => { arity: Arity::Exact(2), func: builtin::pow },
        "atan2" => { arity: Arity::Exact(2), func: builtin::atan2 },
        "clamp" => { arity: Arity::Exact(3), func: clamp::clamp },
    }
}

fn find_builtin(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// Returns `true` if `name` is a recognised function.
///
/// # Example
/// ```
/// use exprnode::interpreter::evaluator::function::core::is_function;
///
/// assert!(is_function("sin"));
/// assert!(is_function("max"));
/// assert!(!is_function("foo"));
/// ```
#[must_use]
pub fn is_function(name: &str) -> bool {
    find_builtin(name).is_some()
}

/// Returns `true` if `name` is on the multi-argument allowlist.
#[must_use]
pub fn is_multiarg_function(name: &str) -> bool {
    MULTIARG_FUNCTIONS.contains(&name)
}

/// Returns the arity of a recognised function.
#[must_use]
pub fn function_arity(name: &str) -> Option<Arity> {
    find_builtin(name).map(|b| b.arity)
}

/// Checks that every called function is recognised.
///
/// `calls` yields each function name with the offset of its call.
///
/// # Errors
/// `UnknownFunction` for the first unrecognised name.
pub fn resolve_functions<'a>(mut calls: impl Iterator<Item = (&'a str, usize)>) -> EvalResult<()> {
    calls.find(|(name, _)| !is_function(name))
         .map_or(Ok(()), |(name, offset)| {
             Err(EvaluationError::UnknownFunction { name: name.to_string(),
                                                    offset })
         })
}

impl Context<'_> {
    /// Evaluates a function call.
    ///
    /// Single-argument functions evaluate their one argument. Multi-argument
    /// functions evaluate every argument; outside bulk mode an argument that is
    /// just an array-valued variable contributes all of its elements. The
    /// resulting value count is then checked against the function's arity.
    ///
    /// # Errors
    /// - `UnknownFunction` if `name` is not recognised.
    /// - `MissingOperand` if a multi-argument function ends up with no values.
    /// - `ArgumentCountMismatch` if the value count does not fit the arity.
    /// - Any error from evaluating the arguments.
    ///
    /// Errors raised by the call itself report `offset`.
    pub(crate) fn eval_function_call(&self,
                                     name: &str,
                                     arguments: &[Expr],
                                     offset: usize)
                                     -> EvalResult<f64> {
        let builtin = find_builtin(name).ok_or_else(|| {
                                            EvaluationError::UnknownFunction { name:
                                                                                   name.to_string(),
                                                                               offset }
                                        })?;

        match builtin.func {
            Builtin::Single(func) => match arguments {
                [argument] => Ok(func(self.eval(argument)?)),
                _ => Err(EvaluationError::ArgumentCountMismatch { name:     name.to_string(),
                                                                  expected: builtin.arity
                                                                                   .to_string(),
                                                                  found:    arguments.len(),
                                                                  offset, }),
            },
            Builtin::Multi(func) => {
                let values = self.eval_spread_arguments(arguments)?;

                if values.is_empty() {
                    return Err(EvaluationError::MissingOperand { name: name.to_string(),
                                                                 offset });
                }
                if !builtin.arity.check(values.len()) {
                    return Err(EvaluationError::ArgumentCountMismatch { name:
                                                                            name.to_string(),
                                                                        expected:
                                                                            builtin.arity
                                                                                   .to_string(),
                                                                        found:
                                                                            values.len(),
                                                                        offset });
                }

                Ok(func(&values))
            },
        }
    }

    /// Evaluates the arguments of a multi-argument call, spreading array-valued
    /// variables when not in bulk mode.
    fn eval_spread_arguments(&self, arguments: &[Expr]) -> EvalResult<Vec<f64>> {
        let mut values = Vec::with_capacity(arguments.len());

        for argument in arguments {
            if self.index().is_none()
               && let Expr::Variable { name, .. } = argument
               && let Some(Value::Array(items)) = self.bindings().get(name)
            {
                values.extend_from_slice(items);
                continue;
            }
            values.push(self.eval(argument)?);
        }

        Ok(values)
    }
}
