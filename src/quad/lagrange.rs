use crate::traits::{cast, two, FloatScalar};

use super::QuadError;

use alloc::vec::Vec;

/// Lagrange basis polynomial on the integer nodes `0, 1, …, n`.
///
/// `L_i(x) = ∏_{j≠i} (x - j) / (i - j)`, equal to 1 at node `i` and 0 at
/// every other node.
///
/// ```
/// use rootquad::quad::lagrange_basis;
///
/// assert_eq!(lagrange_basis(1, 2, 1.0_f64), 1.0);
/// assert_eq!(lagrange_basis(1, 2, 2.0_f64), 0.0);
/// assert_eq!(lagrange_basis(0, 2, 0.5_f64), 0.375);
/// ```
pub fn lagrange_basis<T: FloatScalar>(i: usize, n: usize, x: T) -> T {
    debug_assert!(i <= n, "basis index {i} outside 0..={n}");
    let xi: T = cast(i);
    let mut prod = T::one();
    for j in (0..=n).filter(|&j| j != i) {
        let xj: T = cast(j);
        prod = prod * (x - xj) / (xi - xj);
    }
    prod
}

/// Newton-Cotes weights `B_i = ∫_0^n L_i(x) dx` for `i = 0..=n`.
///
/// The integrand is a polynomial of degree `n`, so a Gauss-Legendre rule with
/// `⌊n/2⌋ + 1` points integrates it exactly (up to rounding). The weights sum
/// to `n`, the length of the reference panel.
///
/// # Errors
///
/// Returns [`QuadError::ZeroDegree`] if `n == 0`.
///
/// # Example
///
/// ```
/// use rootquad::quad::newton_cotes_weights;
///
/// // Simpson: 1/3, 4/3, 1/3
/// let b = newton_cotes_weights::<f64>(2).unwrap();
/// assert!((b[0] - 1.0 / 3.0).abs() < 1e-14);
/// assert!((b[1] - 4.0 / 3.0).abs() < 1e-14);
/// assert!((b[2] - 1.0 / 3.0).abs() < 1e-14);
/// ```
pub fn newton_cotes_weights<T: FloatScalar>(n: usize) -> Result<Vec<T>, QuadError> {
    if n == 0 {
        return Err(QuadError::ZeroDegree);
    }

    let rule = gauss_legendre::<T>(n / 2 + 1);

    // Map [-1, 1] onto [0, n]
    let half = cast::<T>(n) / two::<T>();

    let weights: Vec<T> = (0..=n)
        .map(|i| {
            let sum = rule.iter().fold(T::zero(), |acc, &(t, w)| {
                acc + w * lagrange_basis(i, n, half * (T::one() + t))
            });
            sum * half
        })
        .collect();

    Ok(weights)
}

/// Gauss-Legendre nodes and weights on `[-1, 1]` for an `m`-point rule.
///
/// Nodes are the roots of `P_m`, found by Newton iteration from the
/// Chebyshev-like guess `cos(π (k + 3/4) / (m + 1/2))`; weights are
/// `2 / ((1 - x²) P_m'(x)²)`. Symmetric pairs are computed once.
fn gauss_legendre<T: FloatScalar>(m: usize) -> Vec<(T, T)> {
    let pi = (-T::one()).acos();
    let tol = T::epsilon() * cast::<T>(4);
    let mut rule = Vec::with_capacity(m);

    for k in 0..(m + 1) / 2 {
        let mut x = (pi * cast::<T>(4 * k + 3) / cast::<T>(4 * m + 2)).cos();
        for _ in 0..100 {
            let (p, dp) = legendre(m, x);
            let dx = p / dp;
            x = x - dx;
            if dx.abs() <= tol {
                break;
            }
        }
        let (_, dp) = legendre(m, x);
        let w = two::<T>() / ((T::one() - x * x) * dp * dp);

        rule.push((x, w));
        if 2 * k + 1 != m {
            rule.push((-x, w));
        }
    }

    rule
}

/// `(P_m(x), P_m'(x))` by the three-term recurrence, `m >= 1`, `|x| < 1`.
fn legendre<T: FloatScalar>(m: usize, x: T) -> (T, T) {
    let mut p_prev = T::one();
    let mut p = x;
    for j in 2..=m {
        let jf: T = cast(j);
        let next = ((jf + jf - T::one()) * x * p - (jf - T::one()) * p_prev) / jf;
        p_prev = p;
        p = next;
    }
    let dp = cast::<T>(m) * (x * p - p_prev) / (x * x - T::one());
    (p, dp)
}
