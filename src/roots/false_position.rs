use crate::traits::{two, FloatScalar};

use super::{BracketResult, BracketSettings, RootError};

/// False-position (regula falsi) method for bracketed root finding.
///
/// Each step replaces one endpoint with the zero of the secant line through
/// `(z1, f(z1))` and `(z2, f(z2))`:
///
/// `c = (z1·f(z2) - z2·f(z1)) / (f(z2) - f(z1))`
///
/// using the same sign test as [`bisection`](super::bisection). For convex or
/// concave `f` one endpoint stays fixed, so the bracket never collapses and
/// convergence is only linear. In tolerance mode the iteration therefore also
/// stops once two successive approximations differ by less than the
/// tolerance, provided `f` changes sign across `[c - acc, c + acc]` (two
/// extra evaluations). A small step without that sign change keeps iterating.
///
/// # Errors
///
/// Returns [`RootError::ZeroDenominator`] when `f(z1) == f(z2)`.
/// Returns [`RootError::NotFinite`] if the interpolated point is NaN or infinite.
/// Returns [`RootError::MaxIterations`] if the tolerance is not reached
/// within `settings.max_iter` steps.
/// Invalid settings are rejected as in [`bisection`](super::bisection).
///
/// # Example
///
/// ```
/// use rootquad::roots::{false_position, BracketSettings};
///
/// // Root of cos(x) - x near 0.739085
/// let r = false_position(|x: f64| x.cos() - x, 0.0, 1.0, &BracketSettings::tolerance(1e-12))
///     .unwrap();
/// assert!((r.x - 0.7390851332151607).abs() < 1e-10);
/// ```
pub fn false_position<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    z1: T,
    z2: T,
    settings: &BracketSettings<T>,
) -> Result<BracketResult<T>, RootError> {
    let (limit, tol) = settings.plan()?;

    let mut z1 = z1;
    let mut z2 = z2;
    let mut f1 = f(z1);
    let mut f2 = f(z2);
    let mut evals = 2usize;
    let mut iterations = 0usize;
    let mut last: Option<(T, T)> = None;

    loop {
        if let Some(acc) = tol {
            if (z1 - z2).abs() < acc {
                break;
            }
        }
        if iterations == limit {
            if tol.is_some() {
                log_debug!(iterations, ?z1, ?z2, "false position hit iteration cap");
                return Err(RootError::MaxIterations);
            }
            break;
        }

        let denom = f2 - f1;
        if denom == T::zero() {
            log_debug!(iterations, ?z1, ?z2, "false position: f(z1) == f(z2)");
            return Err(RootError::ZeroDenominator);
        }
        let c = (z1 * f2 - z2 * f1) / denom;
        if !c.is_finite() {
            return Err(RootError::NotFinite);
        }
        let fc = f(c);
        evals += 1;
        iterations += 1;
        let prev = last.map(|(x, _)| x);
        last = Some((c, fc));
        log_trace!(iteration = iterations, ?c, ?fc, "false position step");

        // Exact root
        if fc == T::zero() {
            break;
        }

        if f1 * fc < T::zero() {
            z2 = c;
            f2 = fc;
        } else {
            z1 = c;
            f1 = fc;
        }

        // Stagnating endpoint: a small step only counts once a sign change
        // within `acc` of `c` confirms the root is that close
        if let (Some(acc), Some(p)) = (tol, prev) {
            if (c - p).abs() < acc {
                let lo = f(c - acc);
                let hi = f(c + acc);
                evals += 2;
                if lo == T::zero() || hi == T::zero() || (lo < T::zero()) != (hi < T::zero()) {
                    break;
                }
                log_trace!(iteration = iterations, ?c, "false position: small step, no sign change");
            }
        }
    }

    let (x, fx) = match last {
        Some(point) => point,
        None => {
            let c = (z1 + z2) / two();
            evals += 1;
            (c, f(c))
        }
    };

    log_debug!(?x, ?fx, iterations, evals, "false position finished");

    Ok(BracketResult {
        x,
        fx,
        a: z1,
        b: z2,
        iterations,
        evals,
    })
}
