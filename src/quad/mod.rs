//! Quadrature: composite Newton-Cotes rules of arbitrary degree.
//!
//! A degree-`n` Newton-Cotes rule interpolates the integrand through `n + 1`
//! equally spaced nodes and integrates the interpolating polynomial. The
//! weights `B_0..B_n` are integrals of the Lagrange basis polynomials over
//! `[0, n]` ([`newton_cotes_weights`]); they depend only on `n`.
//!
//! High-degree single-panel rules suffer from the Runge phenomenon, so the
//! composite rule splits `[a, b]` into `m` panels and applies the same
//! weights on each one.
//!
//! - [`newton_cotes`] — one-shot integration, derives the weights on every call
//! - [`NewtonCotes`] — weights computed once for a degree and reused
//! - [`lagrange_basis`] — the basis polynomial the weights integrate
//!
//! Requires the `quad` feature (implies `alloc`).
//!
//! # Example
//!
//! ```
//! use rootquad::quad::newton_cotes;
//!
//! // Simpson's rule (degree 2) is exact for cubics
//! let v = newton_cotes(|x: f64| x * x * x, 0.0, 1.0, 2, 1).unwrap();
//! assert!((v - 0.25).abs() < 1e-12);
//! ```

mod lagrange;
mod newton_cotes;


pub use lagrange::{lagrange_basis, newton_cotes_weights};
pub use newton_cotes::{newton_cotes, NewtonCotes};

/// Errors from quadrature setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadError {
    /// Degree `n = 0` has a single node and no defined weights.
    ZeroDegree,
    /// Panel count `m = 0` leaves nothing to integrate over.
    ZeroPanels,
    /// An interval bound is NaN or infinite.
    InvalidInterval,
    /// `m * n` overflows the node index range.
    TooManyNodes,
}

impl core::fmt::Display for QuadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            QuadError::ZeroDegree => write!(f, "Newton-Cotes degree must be at least 1"),
            QuadError::ZeroPanels => write!(f, "panel count must be at least 1"),
            QuadError::InvalidInterval => write!(f, "interval bounds must be finite"),
            QuadError::TooManyNodes => write!(f, "panels * degree overflows"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QuadError {}
