use crate::traits::{cast, FloatScalar};

use super::{newton_cotes_weights, QuadError};

use alloc::vec::Vec;

/// Composite Newton-Cotes rule with precomputed weights.
///
/// The weights of a degree-`n` rule depend only on `n`, so constructing one
/// `NewtonCotes` and calling [`integrate`](Self::integrate) repeatedly avoids
/// re-deriving them. Results are identical to [`newton_cotes`].
///
/// # Example
///
/// ```
/// use rootquad::quad::NewtonCotes;
///
/// let boole = NewtonCotes::<f64>::new(4).unwrap();
/// let v = boole.integrate(|x| x.sin(), 0.0, core::f64::consts::PI, 8).unwrap();
/// assert!((v - 2.0).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonCotes<T> {
    degree: usize,
    weights: Vec<T>,
}

impl<T: FloatScalar> NewtonCotes<T> {
    /// Derive the weights of the degree-`n` rule.
    ///
    /// # Errors
    ///
    /// Returns [`QuadError::ZeroDegree`] if `n == 0`.
    pub fn new(n: usize) -> Result<Self, QuadError> {
        let weights = newton_cotes_weights(n)?;
        log_debug!(degree = n, ?weights, "newton-cotes weights");
        Ok(Self { degree: n, weights })
    }

    /// Polynomial degree `n` (steps per panel).
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The weights `B_0..=B_n`.
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Integrate `f` over `[a, b]` split into `panels` equal panels.
    ///
    /// With `h = (b - a) / (panels·n)`, node `k` of panel `s` sits at
    /// `a + (n·s + k)·h`. For each `k` the function values are summed over the
    /// panels in ascending order, scaled by `B_k`, and accumulated over
    /// ascending `k`; the total is scaled by `h`. Interior panel boundaries
    /// are therefore evaluated twice, once as the last node of a panel and
    /// once as the first node of the next.
    ///
    /// `a > b` gives the signed integral.
    ///
    /// # Errors
    ///
    /// Returns [`QuadError::ZeroPanels`] if `panels == 0`.
    /// Returns [`QuadError::InvalidInterval`] if `a` or `b` is not finite.
    /// Returns [`QuadError::TooManyNodes`] if `panels·n` overflows.
    pub fn integrate(
        &self,
        mut f: impl FnMut(T) -> T,
        a: T,
        b: T,
        panels: usize,
    ) -> Result<T, QuadError> {
        if panels == 0 {
            return Err(QuadError::ZeroPanels);
        }
        if !(a.is_finite() && b.is_finite()) {
            return Err(QuadError::InvalidInterval);
        }
        let n = self.degree;
        let steps = panels.checked_mul(n).ok_or(QuadError::TooManyNodes)?;

        let h = (b - a) / cast::<T>(steps);

        let mut total = T::zero();
        for (k, &bk) in self.weights.iter().enumerate() {
            let mut column = T::zero();
            for s in 0..panels {
                column = column + f(a + cast::<T>(n * s + k) * h);
            }
            total = total + bk * column;
        }
        let value = total * h;

        log_trace!(degree = n, panels, ?value, "newton-cotes integral");
        Ok(value)
    }
}

/// Composite Newton-Cotes integration of `f` over `[a, b]`.
///
/// Derives the degree-`n` weights and applies them on `panels` equal panels.
/// Use [`NewtonCotes`] to reuse the weights across calls.
///
/// Degree 1 is the composite trapezoid rule, degree 2 composite Simpson.
/// Raising the degree on a single panel invites the Runge phenomenon;
/// raising the panel count instead converges for smooth integrands.
///
/// # Errors
///
/// Returns [`QuadError::ZeroDegree`] if `n == 0`, plus the errors of
/// [`NewtonCotes::integrate`].
///
/// # Example
///
/// ```
/// use rootquad::quad::newton_cotes;
///
/// // Trapezoid rule is exact for linear integrands
/// let v = newton_cotes(|x: f64| x, 0.0, 1.0, 1, 5).unwrap();
/// assert!((v - 0.5).abs() < 1e-15);
/// ```
pub fn newton_cotes<T: FloatScalar>(
    f: impl FnMut(T) -> T,
    a: T,
    b: T,
    n: usize,
    panels: usize,
) -> Result<T, QuadError> {
    NewtonCotes::new(n)?.integrate(f, a, b, panels)
}
