//! Scalar root finding: bracketing and open iterative methods.
//!
//! All algorithms are no-alloc compatible and generic over [`FloatScalar`].
//! Trace variants returning a `Vec` require the `alloc` feature.
//!
//! # Bracketing methods
//!
//! - [`bisection`] — interval halving on a sign change
//! - [`false_position`] — regula falsi, linear interpolation between endpoints
//!
//! Both take a [`BracketSettings`] selecting a fixed iteration count or an
//! absolute tolerance on the bracket width (see [`Termination`]). Brackets are
//! not validated: endpoints without a sign change give a meaningless answer
//! rather than an error.
//!
//! # Open methods
//!
//! - [`newton_raphson`] — Newton's iteration with user-supplied derivative
//! - [`secant`] — finite-difference Newton from two seeds
//!
//! Both always run exactly `n` steps with no convergence test. The full
//! sequence of iterates is available from the `*_trace` (fixed-size array)
//! and `*_trace_dyn` (`Vec`) variants.
//!
//! # Example
//!
//! ```
//! use rootquad::roots::{bisection, newton_raphson, BracketSettings};
//!
//! let f = |x: f64| x * x - 2.0;
//!
//! let r = bisection(f, 0.0, 2.0, &BracketSettings::tolerance(1e-10)).unwrap();
//! assert!((r.x - core::f64::consts::SQRT_2).abs() < 1e-9);
//!
//! let x = newton_raphson(f, |x| 2.0 * x, 1.0, 10).unwrap();
//! assert!((x - core::f64::consts::SQRT_2).abs() < 1e-12);
//! ```

mod bisection;
mod false_position;
mod newton;
mod secant;


pub use bisection::bisection;
pub use false_position::false_position;
pub use newton::{newton_raphson, newton_raphson_trace};
pub use secant::{secant, secant_trace};

#[cfg(feature = "alloc")]
pub use newton::newton_raphson_trace_dyn;
#[cfg(feature = "alloc")]
pub use secant::secant_trace_dyn;

use crate::traits::FloatScalar;

/// Default cap on tolerance-mode iterations for bracketing methods.
pub const DEFAULT_MAX_ITER: usize = 1000;

/// Errors from root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootError {
    /// Iteration count is zero, or too small for the method (secant needs two).
    InvalidIterations,
    /// Tolerance is not a positive finite number.
    InvalidTolerance,
    /// Coincident function values made an interpolation denominator zero.
    ZeroDenominator,
    /// The derivative vanished at an iterate that is not an exact root.
    ZeroDerivative,
    /// An iterate became NaN or infinite.
    NotFinite,
    /// Tolerance was not reached within the iteration cap.
    MaxIterations,
}

impl core::fmt::Display for RootError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RootError::InvalidIterations => write!(f, "iteration count too small for the method"),
            RootError::InvalidTolerance => write!(f, "tolerance must be positive and finite"),
            RootError::ZeroDenominator => write!(f, "coincident function values (division by zero)"),
            RootError::ZeroDerivative => write!(f, "derivative is zero (division by zero)"),
            RootError::NotFinite => write!(f, "iterate is NaN or infinity"),
            RootError::MaxIterations => write!(f, "maximum iterations exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RootError {}

/// When a bracketing method stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Termination<T> {
    /// Run exactly this many iterations and return the last approximation.
    Iterations(usize),
    /// Iterate until the bracket width `|b - a|` drops below this value.
    Tolerance(T),
}

/// Settings for the bracketing root finders.
#[derive(Debug, Clone, Copy)]
pub struct BracketSettings<T> {
    /// Stopping rule.
    pub termination: Termination<T>,
    /// Iteration cap for [`Termination::Tolerance`]; ignored for a fixed count.
    pub max_iter: usize,
}

impl<T> BracketSettings<T> {
    /// Tolerance-based termination with the default iteration cap.
    pub fn tolerance(acc: T) -> Self {
        Self {
            termination: Termination::Tolerance(acc),
            max_iter: DEFAULT_MAX_ITER,
        }
    }

    /// Fixed iteration count.
    pub fn iterations(n: usize) -> Self {
        Self {
            termination: Termination::Iterations(n),
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}

impl<T: FloatScalar> BracketSettings<T> {
    /// Validate the settings and resolve them into an iteration limit plus
    /// an optional width tolerance.
    pub(crate) fn plan(&self) -> Result<(usize, Option<T>), RootError> {
        match self.termination {
            Termination::Iterations(0) => Err(RootError::InvalidIterations),
            Termination::Iterations(n) => Ok((n, None)),
            Termination::Tolerance(acc) => {
                if !(acc > T::zero() && acc.is_finite()) {
                    return Err(RootError::InvalidTolerance);
                }
                if self.max_iter == 0 {
                    return Err(RootError::InvalidIterations);
                }
                Ok((self.max_iter, Some(acc)))
            }
        }
    }
}

impl Default for BracketSettings<f64> {
    fn default() -> Self {
        Self::tolerance(1e-12)
    }
}

impl Default for BracketSettings<f32> {
    fn default() -> Self {
        Self::tolerance(1e-6)
    }
}

/// Result of a bracketing root finder.
#[derive(Debug, Clone, Copy)]
pub struct BracketResult<T> {
    /// Last computed approximation: the answer.
    pub x: T,
    /// Function value at the answer: `f(x)`.
    pub fx: T,
    /// First bracket endpoint after the final update.
    pub a: T,
    /// Second bracket endpoint after the final update.
    pub b: T,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Number of function evaluations.
    pub evals: usize,
}
