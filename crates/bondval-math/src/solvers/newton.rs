//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Newton-Raphson over a fallible objective and derivative.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// The derivative closure receives both `x` and the already computed `f(x)`
/// so that difference schemes need not re-evaluate the objective.
///
/// Errors returned by either closure are propagated unchanged, which lets
/// callers report domain failures in their own error type.
///
/// # Errors
///
/// - `MathError::DerivativeTooSmall` if `|f'(x)| < config.min_derivative`
/// - `MathError::NonFinite` if `f(x)` or `f'(x)` is NaN or infinite
/// - `MathError::ConvergenceFailed` if `max_iterations` is exhausted
pub fn try_newton_raphson<F, DF, E>(
    mut f: F,
    mut df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> Result<SolverResult, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    DF: FnMut(f64, f64) -> Result<f64, E>,
    E: From<MathError>,
{
    config.validate()?;

    let mut x = initial_guess;
    let mut last = (x, f64::NAN);

    for iteration in 0..config.max_iterations {
        let fx = f(x)?;
        if !fx.is_finite() {
            return Err(MathError::NonFinite { x, value: fx }.into());
        }
        last = (x, fx);

        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x, fx)?;
        if !dfx.is_finite() {
            return Err(MathError::NonFinite { x, value: dfx }.into());
        }
        if dfx.abs() < config.min_derivative {
            return Err(MathError::DerivativeTooSmall { x, derivative: dfx }.into());
        }

        let step = fx / dfx;
        log::trace!("newton iteration {iteration}: x = {x}, f = {fx:e}, f' = {dfx:e}");
        x -= step;
    }

    let (last_x, residual) = last;
    Err(MathError::convergence_failed(config.max_iterations, residual.abs(), last_x).into())
}

/// Newton-Raphson with a forward-difference derivative over a fallible
/// objective.
///
/// The derivative is estimated as `(f(x + h) - f(x)) / h` with
/// `h = config.difference_step`.
///
/// # Errors
///
/// See [`try_newton_raphson`].
pub fn try_newton_raphson_numerical<F, E>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> Result<SolverResult, E>
where
    F: Fn(f64) -> Result<f64, E>,
    E: From<MathError>,
{
    let h = config.difference_step;
    try_newton_raphson(&f, |x, fx| Ok((f(x + h)? - fx) / h), initial_guess, config)
}

/// Newton-Raphson root-finding algorithm.
///
/// This method has quadratic convergence near the root but requires
/// the derivative of the function.
///
/// # Example
///
/// ```rust
/// use bondval_math::solvers::{newton_raphson, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    try_newton_raphson(|x| Ok(f(x)), |x, _| Ok(df(x)), initial_guess, config)
}

/// Newton-Raphson with a forward-difference derivative.
///
/// Use when an analytical derivative is not available.
pub fn newton_raphson_numerical<F>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    try_newton_raphson_numerical(|x| Ok(f(x)), initial_guess, config)
}
