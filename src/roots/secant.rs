use crate::traits::FloatScalar;

use super::RootError;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Secant method from two seeds.
///
/// Runs exactly `n - 2` updates
///
/// `x_i = x_{i-1} - f(x_{i-1})·(x_{i-1} - x_{i-2}) / (f(x_{i-1}) - f(x_{i-2}))`
///
/// and returns the last iterate. Each step costs one new function
/// evaluation. When `f(x_{i-1})` is exactly zero, or the iteration has
/// converged to two identical iterates, the step is zero and the value is
/// carried forward. Equal seeds with `f(z1) != 0` are an error.
///
/// # Arguments
///
/// * `f` — function whose root is sought
/// * `z0`, `z1` — seeds (the first two trace entries)
/// * `n` — trace length, at least 2
///
/// # Errors
///
/// Returns [`RootError::InvalidIterations`] if `n < 2`.
/// Returns [`RootError::ZeroDenominator`] if two consecutive function values
/// coincide while `f(x_{i-1}) != 0`, including equal seeds.
/// Returns [`RootError::NotFinite`] if an iterate is NaN or infinite.
///
/// # Example
///
/// ```
/// use rootquad::roots::secant;
///
/// let x = secant(|x: f64| x * x - 2.0, 1.0, 2.0, 15).unwrap();
/// assert!((x - core::f64::consts::SQRT_2).abs() < 1e-12);
/// ```
pub fn secant<T: FloatScalar>(
    f: impl FnMut(T) -> T,
    z0: T,
    z1: T,
    n: usize,
) -> Result<T, RootError> {
    secant_run(f, z0, z1, n, |_, _| {})
}

/// Secant method returning the full trace in a fixed-size buffer.
///
/// ```
/// use rootquad::roots::secant_trace;
///
/// let trace = secant_trace::<f64, 3>(|x| x * x - 2.0, 1.0, 2.0).unwrap();
/// assert_eq!(trace, [1.0, 2.0, 2.0 - 2.0 * 1.0 / 3.0]);
/// ```
pub fn secant_trace<T: FloatScalar, const N: usize>(
    f: impl FnMut(T) -> T,
    z0: T,
    z1: T,
) -> Result<[T; N], RootError> {
    let mut trace = [T::zero(); N];
    secant_run(f, z0, z1, N, |i, x| trace[i] = x)?;
    Ok(trace)
}

/// Secant method returning the full trace as a `Vec` of length `n`.
///
/// Dynamic counterpart of [`secant_trace`].
#[cfg(feature = "alloc")]
pub fn secant_trace_dyn<T: FloatScalar>(
    f: impl FnMut(T) -> T,
    z0: T,
    z1: T,
    n: usize,
) -> Result<Vec<T>, RootError> {
    let mut trace = Vec::with_capacity(n);
    secant_run(f, z0, z1, n, |_, x| trace.push(x))?;
    Ok(trace)
}

fn secant_run<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    z0: T,
    z1: T,
    n: usize,
    mut record: impl FnMut(usize, T),
) -> Result<T, RootError> {
    if n < 2 {
        return Err(RootError::InvalidIterations);
    }
    if !(z0.is_finite() && z1.is_finite()) {
        return Err(RootError::NotFinite);
    }

    record(0, z0);
    record(1, z1);

    let mut x0 = z0;
    let mut x1 = z1;
    let mut f0 = f(x0);
    let mut f1 = f(x1);

    for i in 2..n {
        let num = f1 * (x1 - x0);
        // Exact root, or equal iterates after at least one real update
        let x2 = if f1 == T::zero() || (x1 == x0 && i > 2) {
            x1
        } else {
            let denom = f1 - f0;
            if denom == T::zero() {
                log_debug!(iteration = i, ?x0, ?x1, "secant: coincident function values");
                return Err(RootError::ZeroDenominator);
            }
            let next = x1 - num / denom;
            if !next.is_finite() {
                log_debug!(iteration = i, "secant: iterate not finite");
                return Err(RootError::NotFinite);
            }
            next
        };
        record(i, x2);
        log_trace!(iteration = i, x = ?x2, "secant step");

        x0 = x1;
        f0 = f1;
        x1 = x2;
        // Last value is never used
        if i + 1 < n {
            f1 = f(x1);
        }
    }

    log_debug!(x = ?x1, n, "secant finished");
    Ok(x1)
}
