#![cfg(all(feature = "roots", feature = "quad"))]

use rootquad::quad::{newton_cotes, NewtonCotes};
use rootquad::roots::{
    bisection, false_position, newton_raphson, newton_raphson_trace_dyn, secant, secant_trace_dyn,
    BracketSettings, RootError,
};

const ROOT_TOL: f64 = 1e-8;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

/// `(f, a, b, root)`
type Case = (fn(f64) -> f64, f64, f64, f64);

/// Functions with a known simple root inside the given bracket.
fn bracketed_cases() -> [Case; 5] {
    [
        ((|x: f64| x * x - 2.0) as fn(f64) -> f64, 0.0, 2.0, core::f64::consts::SQRT_2),
        ((|x: f64| x * x * x - x - 2.0) as fn(f64) -> f64, 1.0, 2.0, 1.521_379_706_804_567_6),
        ((|x: f64| x.cos() - x) as fn(f64) -> f64, 0.0, 1.0, 0.739_085_133_215_160_7),
        ((|x: f64| x.exp() - 3.0) as fn(f64) -> f64, 0.0, 2.0, 3.0_f64.ln()),
        ((|x: f64| x.sin()) as fn(f64) -> f64, 3.0, 4.0, core::f64::consts::PI),
    ]
}

// ── Root finding ─────────────────────────────────────────────────────

#[test]
fn bracketing_methods_reach_known_roots() {
    let settings = BracketSettings::tolerance(1e-9);
    for (f, a, b, root) in bracketed_cases() {
        let r = bisection(f, a, b, &settings).unwrap();
        assert_near(r.x, root, ROOT_TOL, "bisection");

        let r = false_position(f, a, b, &settings).unwrap();
        assert_near(r.x, root, ROOT_TOL, "false position");
    }
}

#[test]
fn bisection_width_is_initial_over_power_of_two() {
    let (a0, b0) = (-3.0_f64, 5.0_f64);
    for k in 1..=30 {
        let r = bisection(|x| x - 1.0 / 3.0, a0, b0, &BracketSettings::iterations(k)).unwrap();
        let width = (r.b - r.a).abs();
        assert_eq!(width, (b0 - a0) / 2.0_f64.powi(k as i32), "k = {}", k);
    }
}

#[test]
fn open_methods_converge_to_sqrt2() {
    let f = |x: f64| x * x - 2.0;

    let x = newton_raphson(f, |x| 2.0 * x, 1.0, 10).unwrap();
    assert_near(x, core::f64::consts::SQRT_2, 1e-6, "newton");

    let x = secant(f, 1.0, 2.0, 15).unwrap();
    assert_near(x, core::f64::consts::SQRT_2, 1e-6, "secant");
}

#[test]
fn traces_expose_every_iterate() {
    let f = |x: f64| x * x - 2.0;

    let trace = newton_raphson_trace_dyn(f, |x| 2.0 * x, 1.0, 10).unwrap();
    assert_eq!(trace.len(), 10);
    assert_eq!(trace[0], 1.0);
    assert_eq!(*trace.last().unwrap(), newton_raphson(f, |x| 2.0 * x, 1.0, 10).unwrap());

    let trace = secant_trace_dyn(f, 1.0, 2.0, 15).unwrap();
    assert_eq!(trace.len(), 15);
    assert_eq!(&trace[..2], &[1.0, 2.0]);
    assert_eq!(*trace.last().unwrap(), secant(f, 1.0, 2.0, 15).unwrap());
}

#[test]
fn singular_steps_are_errors_not_nan() {
    let f = |x: f64| x * x - 2.0;

    assert_eq!(
        newton_raphson(f, |_| 0.0, 1.0, 3).unwrap_err(),
        RootError::ZeroDerivative
    );
    assert_eq!(
        secant(f, -2.0, 2.0, 3).unwrap_err(),
        RootError::ZeroDenominator
    );
    assert_eq!(
        false_position(|_| 4.0, 0.0, 1.0, &BracketSettings::iterations(3)).unwrap_err(),
        RootError::ZeroDenominator
    );
}

// ── Quadrature ───────────────────────────────────────────────────────

#[test]
fn trapezoid_exact_for_identity() {
    for panels in [1, 2, 3, 10, 100] {
        let v = newton_cotes(|x: f64| x, 0.0, 1.0, 1, panels).unwrap();
        assert_near(v, 0.5, 1e-14, "trapezoid");
    }
}

#[test]
fn simpson_exact_for_cubic() {
    let v = newton_cotes(|x: f64| x * x * x, 0.0, 1.0, 2, 1).unwrap();
    assert_near(v, 0.25, 1e-6, "simpson");
}

#[test]
fn error_shrinks_with_panels() {
    // ∫₀² x⁴ dx = 32/5 with the trapezoid and 3/8 rules
    let exact = 32.0 / 5.0;
    for degree in [1, 3] {
        let rule = NewtonCotes::<f64>::new(degree).unwrap();
        let mut prev = f64::INFINITY;
        for panels in 1..=10 {
            let err = (rule.integrate(|x| x.powi(4), 0.0, 2.0, panels).unwrap() - exact).abs();
            assert!(err <= prev, "degree {}: {} panels", degree, panels);
            prev = err;
        }
    }
}
