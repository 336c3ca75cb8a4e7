//! # rootquad
//!
//! Classical numerical methods for scalar functions: root finding by
//! bisection, false position, Newton-Raphson and secant iteration, and
//! composite Newton-Cotes quadrature of arbitrary degree. No-std compatible;
//! every procedure is a stateless function over caller-supplied closures.
//!
//! ## Quick start
//!
//! ```
//! use rootquad::roots::{bisection, secant, BracketSettings};
//! use rootquad::quad::newton_cotes;
//!
//! let f = |x: f64| x * x - 2.0;
//!
//! // Bracketed: halve [0, 2] until narrower than 1e-9
//! let r = bisection(f, 0.0, 2.0, &BracketSettings::tolerance(1e-9)).unwrap();
//! assert!((r.x - core::f64::consts::SQRT_2).abs() < 1e-8);
//!
//! // Open: 15 secant iterates from seeds 1 and 2
//! let x = secant(f, 1.0, 2.0, 15).unwrap();
//! assert!((x - core::f64::consts::SQRT_2).abs() < 1e-6);
//!
//! // ∫₀¹ x³ dx with Simpson's rule on one panel
//! let v = newton_cotes(|x: f64| x * x * x, 0.0, 1.0, 2, 1).unwrap();
//! assert!((v - 0.25).abs() < 1e-6);
//! ```
//!
//! ## Modules
//!
//! - [`roots`] — [`roots::bisection`] and [`roots::false_position`] on a
//!   bracket with a fixed iteration count or a width tolerance
//!   ([`roots::Termination`]); [`roots::newton_raphson`] and [`roots::secant`]
//!   for a fixed number of steps, with fixed-size (`*_trace`) and `Vec`
//!   (`*_trace_dyn`) iteration traces. Requires `roots` feature.
//!
//! - [`quad`] — Composite Newton-Cotes rules: [`quad::newton_cotes`] derives
//!   the weights per call, [`quad::NewtonCotes`] caches them per degree.
//!   Weights are integrals of [`quad::lagrange_basis`]. Requires `quad` feature.
//!
//! - [`traits`] — [`FloatScalar`], the element bound (`f32`, `f64`).
//!
//! ## Errors
//!
//! Singular steps (coincident function values, zero derivative) and invalid
//! configurations return `Err` instead of a silent NaN. Brackets are not
//! checked for a sign change.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` impls |
//! | `alloc`   | via std  | `Vec` iteration traces |
//! | `roots`   | yes      | Root finding (bisection, false position, Newton-Raphson, secant) |
//! | `quad`    | yes      | Newton-Cotes quadrature (implies `alloc`) |
//! | `libm`    | baseline | Pure-Rust software float fallback |
//! | `tracing` | no       | Per-iteration diagnostics via `tracing` |
//! | `all`     | no       | All features |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod macros;

#[cfg(feature = "quad")]
pub mod quad;
#[cfg(feature = "roots")]
pub mod roots;
pub mod traits;

pub use traits::FloatScalar;

#[cfg(feature = "quad")]
pub use quad::{newton_cotes, NewtonCotes, QuadError};
#[cfg(feature = "roots")]
pub use roots::{
    bisection, false_position, newton_raphson, secant, BracketResult, BracketSettings,
    RootError, Termination,
};
