use crate::traits::FloatScalar;

use super::RootError;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Newton-Raphson method with a user-supplied derivative.
///
/// Runs exactly `n - 1` updates `x_{i} = x_{i-1} - f(x_{i-1}) / f'(x_{i-1})`
/// starting from `z0` and returns the last iterate. There is no convergence
/// or divergence test: an oscillating sequence still yields its `n`-th value.
/// An iterate with `f(x) == 0` is an exact root and is carried forward.
///
/// # Arguments
///
/// * `f` — function whose root is sought
/// * `df` — derivative of `f`
/// * `z0` — initial guess (the first trace entry)
/// * `n` — trace length, at least 1
///
/// # Errors
///
/// Returns [`RootError::InvalidIterations`] if `n == 0`.
/// Returns [`RootError::ZeroDerivative`] if `f'` vanishes at a non-root iterate.
/// Returns [`RootError::NotFinite`] if an iterate is NaN or infinite.
///
/// # Example
///
/// ```
/// use rootquad::roots::newton_raphson;
///
/// // e^x - 3 has its root at ln 3
/// let x = newton_raphson(|x: f64| x.exp() - 3.0, |x: f64| x.exp(), 1.0, 8).unwrap();
/// assert!((x - 3.0_f64.ln()).abs() < 1e-12);
/// ```
pub fn newton_raphson<T: FloatScalar>(
    f: impl FnMut(T) -> T,
    df: impl FnMut(T) -> T,
    z0: T,
    n: usize,
) -> Result<T, RootError> {
    newton_run(f, df, z0, n, |_, _| {})
}

/// Newton-Raphson method returning the full trace in a fixed-size buffer.
///
/// `trace[0] == z0` and `trace[N - 1]` equals [`newton_raphson`] with `n = N`.
///
/// ```
/// use rootquad::roots::newton_raphson_trace;
///
/// let trace = newton_raphson_trace::<f64, 4>(|x| x * x - 2.0, |x| 2.0 * x, 1.0).unwrap();
/// assert_eq!(trace[0], 1.0);
/// assert_eq!(trace[1], 1.5);
/// assert!((trace[3] - core::f64::consts::SQRT_2).abs() < 1e-5);
/// ```
pub fn newton_raphson_trace<T: FloatScalar, const N: usize>(
    f: impl FnMut(T) -> T,
    df: impl FnMut(T) -> T,
    z0: T,
) -> Result<[T; N], RootError> {
    let mut trace = [T::zero(); N];
    newton_run(f, df, z0, N, |i, x| trace[i] = x)?;
    Ok(trace)
}

/// Newton-Raphson method returning the full trace as a `Vec` of length `n`.
///
/// Dynamic counterpart of [`newton_raphson_trace`].
#[cfg(feature = "alloc")]
pub fn newton_raphson_trace_dyn<T: FloatScalar>(
    f: impl FnMut(T) -> T,
    df: impl FnMut(T) -> T,
    z0: T,
    n: usize,
) -> Result<Vec<T>, RootError> {
    let mut trace = Vec::with_capacity(n);
    newton_run(f, df, z0, n, |_, x| trace.push(x))?;
    Ok(trace)
}

/// Shared driver: calls `record(i, x_i)` for every trace index.
fn newton_run<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    mut df: impl FnMut(T) -> T,
    z0: T,
    n: usize,
    mut record: impl FnMut(usize, T),
) -> Result<T, RootError> {
    if n == 0 {
        return Err(RootError::InvalidIterations);
    }
    if !z0.is_finite() {
        return Err(RootError::NotFinite);
    }

    let mut x = z0;
    record(0, x);

    for i in 1..n {
        let fx = f(x);
        if fx != T::zero() {
            let dfx = df(x);
            if dfx == T::zero() {
                log_debug!(iteration = i, ?x, ?fx, "newton-raphson: zero derivative");
                return Err(RootError::ZeroDerivative);
            }
            x = x - fx / dfx;
            if !x.is_finite() {
                log_debug!(iteration = i, "newton-raphson: iterate not finite");
                return Err(RootError::NotFinite);
            }
        }
        record(i, x);
        log_trace!(iteration = i, ?x, "newton-raphson step");
    }

    log_debug!(?x, n, "newton-raphson finished");
    Ok(x)
}
