use crate::traits::{two, FloatScalar};

use super::{BracketResult, BracketSettings, RootError};

/// Bisection method for bracketed root finding.
///
/// Halves the bracket `[a, b]` each step, keeping the half on which
/// `f(a) * f(c) < 0` holds. If `f(c)` is exactly zero the midpoint is
/// returned immediately.
///
/// The bracket is not validated. When `f(a)` and `f(b)` share a sign the
/// sign test always moves `a`, and the result converges to `b`.
///
/// # Arguments
///
/// * `f` — function whose root is sought
/// * `a`, `b` — bracket endpoints, expected to satisfy `f(a) * f(b) < 0`
/// * `settings` — fixed iteration count or width tolerance
///
/// # Errors
///
/// Returns [`RootError::InvalidIterations`] for a zero iteration count or cap.
/// Returns [`RootError::InvalidTolerance`] for a non-positive tolerance.
/// Returns [`RootError::NotFinite`] if a midpoint is NaN or infinite.
/// Returns [`RootError::MaxIterations`] if the tolerance is not reached
/// within `settings.max_iter` steps.
///
/// # Example
///
/// ```
/// use rootquad::roots::{bisection, BracketSettings};
///
/// // Root of x³ - x - 2 near 1.5214
/// let r = bisection(|x: f64| x * x * x - x - 2.0, 1.0, 2.0, &BracketSettings::tolerance(1e-9))
///     .unwrap();
/// assert!(r.fx.abs() < 1e-8);
///
/// // Fixed iteration count: the bracket width halves every step
/// let r = bisection(|x: f64| x * x - 2.0, 0.0, 2.0, &BracketSettings::iterations(10)).unwrap();
/// assert_eq!((r.b - r.a).abs(), 2.0 / 1024.0);
/// ```
pub fn bisection<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
    settings: &BracketSettings<T>,
) -> Result<BracketResult<T>, RootError> {
    let (limit, tol) = settings.plan()?;

    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let mut evals = 1usize;
    let mut iterations = 0usize;
    let mut last: Option<(T, T)> = None;

    loop {
        if let Some(acc) = tol {
            if (a - b).abs() < acc {
                break;
            }
        }
        if iterations == limit {
            if tol.is_some() {
                log_debug!(iterations, ?a, ?b, "bisection hit iteration cap");
                return Err(RootError::MaxIterations);
            }
            break;
        }

        let c = (a + b) / two();
        if !c.is_finite() {
            return Err(RootError::NotFinite);
        }
        let fc = f(c);
        evals += 1;
        iterations += 1;
        last = Some((c, fc));
        log_trace!(iteration = iterations, ?c, ?fc, "bisection step");

        // Exact root
        if fc == T::zero() {
            break;
        }

        if fa * fc < T::zero() {
            b = c;
        } else {
            a = c;
            fa = fc;
        }
    }

    // Only reached without a step when the initial bracket already meets
    // the tolerance.
    let (x, fx) = match last {
        Some(point) => point,
        None => {
            let c = (a + b) / two();
            evals += 1;
            (c, f(c))
        }
    };

    log_debug!(?x, ?fx, iterations, evals, "bisection finished");

    Ok(BracketResult {
        x,
        fx,
        a,
        b,
        iterations,
        evals,
    })
}
